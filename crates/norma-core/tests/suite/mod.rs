mod numbers;
mod tokens;
mod uppercase;
