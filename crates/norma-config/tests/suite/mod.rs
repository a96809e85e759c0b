mod load;
mod validation;
