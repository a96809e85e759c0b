//! Built-in lowercase -> uppercase table.
//!
//! Each entry is a pair of single-scalar UTF-8 strings. The set was produced by
//! running every letter of a European-language corpus through a UTF-8 aware
//! `sed '\U'` and keeping the pairs that changed. It deliberately omits
//! multi-codepoint expansions such as `ß -> SS`.
//!
//! Entries are stored as strings rather than `char` literals so that
//! [`CaseMap::from_pairs`](crate::CaseMap::from_pairs) validates them on load.

pub(crate) static UPPERCASE_PAIRS: &[(&str, &str)] = &[
    // Latin (Basic, Latin-1, Extended-A/B, IPA, Extended Additional)
    ("a", "A"), ("b", "B"), ("c", "C"), ("d", "D"), ("e", "E"), ("f", "F"), ("g", "G"),
    ("h", "H"), ("i", "I"), ("j", "J"), ("k", "K"), ("l", "L"), ("m", "M"), ("n", "N"),
    ("o", "O"), ("p", "P"), ("q", "Q"), ("r", "R"), ("s", "S"), ("t", "T"), ("u", "U"),
    ("v", "V"), ("w", "W"), ("x", "X"), ("y", "Y"), ("z", "Z"), ("à", "À"), ("á", "Á"),
    ("â", "Â"), ("ã", "Ã"), ("ä", "Ä"), ("å", "Å"), ("æ", "Æ"), ("ç", "Ç"), ("è", "È"),
    ("é", "É"), ("ê", "Ê"), ("ë", "Ë"), ("ì", "Ì"), ("í", "Í"), ("î", "Î"), ("ï", "Ï"),
    ("ð", "Ð"), ("ñ", "Ñ"), ("ò", "Ò"), ("ó", "Ó"), ("ô", "Ô"), ("õ", "Õ"), ("ö", "Ö"),
    ("ø", "Ø"), ("ù", "Ù"), ("ú", "Ú"), ("û", "Û"), ("ü", "Ü"), ("ý", "Ý"), ("þ", "Þ"),
    ("ÿ", "Ÿ"), ("ā", "Ā"), ("ă", "Ă"), ("ą", "Ą"), ("ć", "Ć"), ("ĉ", "Ĉ"), ("ċ", "Ċ"),
    ("č", "Č"), ("ď", "Ď"), ("đ", "Đ"), ("ē", "Ē"), ("ĕ", "Ĕ"), ("ė", "Ė"), ("ę", "Ę"),
    ("ě", "Ě"), ("ĝ", "Ĝ"), ("ğ", "Ğ"), ("ġ", "Ġ"), ("ģ", "Ģ"), ("ĥ", "Ĥ"), ("ħ", "Ħ"),
    ("ĩ", "Ĩ"), ("ī", "Ī"), ("ĭ", "Ĭ"), ("į", "Į"), ("ı", "I"), ("ĵ", "Ĵ"), ("ķ", "Ķ"),
    ("ĺ", "Ĺ"), ("ļ", "Ļ"), ("ľ", "Ľ"), ("ł", "Ł"), ("ń", "Ń"), ("ņ", "Ņ"), ("ň", "Ň"),
    ("ŋ", "Ŋ"), ("ō", "Ō"), ("ŏ", "Ŏ"), ("ő", "Ő"), ("œ", "Œ"), ("ŕ", "Ŕ"), ("ŗ", "Ŗ"),
    ("ř", "Ř"), ("ś", "Ś"), ("ŝ", "Ŝ"), ("ş", "Ş"), ("š", "Š"), ("ţ", "Ţ"), ("ť", "Ť"),
    ("ũ", "Ũ"), ("ū", "Ū"), ("ŭ", "Ŭ"), ("ů", "Ů"), ("ű", "Ű"), ("ų", "Ų"), ("ŵ", "Ŵ"),
    ("ŷ", "Ŷ"), ("ź", "Ź"), ("ż", "Ż"), ("ž", "Ž"), ("ƙ", "Ƙ"), ("ơ", "Ơ"), ("ư", "Ư"),
    ("ƶ", "Ƶ"), ("ǎ", "Ǎ"), ("ǐ", "Ǐ"), ("ǒ", "Ǒ"), ("ǔ", "Ǔ"), ("ǘ", "Ǘ"), ("ǜ", "Ǜ"),
    ("ǝ", "Ǝ"), ("ǟ", "Ǟ"), ("ǣ", "Ǣ"), ("ǧ", "Ǧ"), ("ǫ", "Ǫ"), ("ǵ", "Ǵ"), ("ǻ", "Ǻ"),
    ("ȃ", "Ȃ"), ("ȇ", "Ȇ"), ("ȋ", "Ȋ"), ("ȏ", "Ȏ"), ("ȕ", "Ȕ"), ("ȥ", "Ȥ"), ("ɒ", "Ɒ"),
    ("ɔ", "Ɔ"), ("ɠ", "Ɠ"), ("ʒ", "Ʒ"), ("ḇ", "Ḇ"), ("ḍ", "Ḍ"), ("ḏ", "Ḏ"), ("ḑ", "Ḑ"),
    ("ḗ", "Ḗ"), ("ḥ", "Ḥ"), ("ḩ", "Ḩ"), ("ḫ", "Ḫ"), ("ḱ", "Ḱ"), ("ḳ", "Ḳ"), ("ḷ", "Ḷ"),
    ("ḿ", "Ḿ"), ("ṃ", "Ṃ"), ("ṅ", "Ṅ"), ("ṇ", "Ṇ"), ("ṉ", "Ṉ"), ("ṕ", "Ṕ"), ("ṛ", "Ṛ"),
    ("ṟ", "Ṟ"), ("ṣ", "Ṣ"), ("ṭ", "Ṭ"), ("ṯ", "Ṯ"), ("ṳ", "Ṳ"), ("ẋ", "Ẋ"), ("ẓ", "Ẓ"),
    ("ẕ", "Ẕ"), ("ạ", "Ạ"), ("ả", "Ả"), ("ấ", "Ấ"), ("ầ", "Ầ"), ("ẩ", "Ẩ"), ("ẫ", "Ẫ"),
    ("ậ", "Ậ"), ("ắ", "Ắ"), ("ằ", "Ằ"), ("ẳ", "Ẳ"), ("ẵ", "Ẵ"), ("ặ", "Ặ"), ("ẹ", "Ẹ"),
    ("ẻ", "Ẻ"), ("ẽ", "Ẽ"), ("ế", "Ế"), ("ề", "Ề"), ("ể", "Ể"), ("ễ", "Ễ"), ("ệ", "Ệ"),
    ("ỉ", "Ỉ"), ("ị", "Ị"), ("ọ", "Ọ"), ("ỏ", "Ỏ"), ("ố", "Ố"), ("ồ", "Ồ"), ("ổ", "Ổ"),
    ("ộ", "Ộ"), ("ớ", "Ớ"), ("ờ", "Ờ"), ("ở", "Ở"), ("ỡ", "Ỡ"), ("ợ", "Ợ"), ("ụ", "Ụ"),
    ("ủ", "Ủ"), ("ứ", "Ứ"), ("ừ", "Ừ"), ("ử", "Ử"), ("ữ", "Ữ"), ("ự", "Ự"), ("ỳ", "Ỳ"),
    ("ỹ", "Ỹ"),
    // Greek
    ("ά", "Ά"), ("έ", "Έ"), ("ή", "Ή"), ("ί", "Ί"), ("α", "Α"), ("β", "Β"), ("γ", "Γ"),
    ("δ", "Δ"), ("ε", "Ε"), ("ζ", "Ζ"), ("η", "Η"), ("θ", "Θ"), ("ι", "Ι"), ("κ", "Κ"),
    ("λ", "Λ"), ("μ", "Μ"), ("ν", "Ν"), ("ξ", "Ξ"), ("ο", "Ο"), ("π", "Π"), ("ς", "Σ"),
    ("σ", "Σ"), ("τ", "Τ"), ("υ", "Υ"), ("φ", "Φ"), ("χ", "Χ"), ("ψ", "Ψ"), ("ω", "Ω"),
    ("ϊ", "Ϊ"), ("ϋ", "Ϋ"), ("ό", "Ό"), ("ύ", "Ύ"), ("ώ", "Ώ"),
    // Cyrillic
    ("а", "А"), ("б", "Б"), ("в", "В"), ("г", "Г"), ("д", "Д"), ("е", "Е"), ("ж", "Ж"),
    ("з", "З"), ("и", "И"), ("й", "Й"), ("к", "К"), ("л", "Л"), ("м", "М"), ("н", "Н"),
    ("о", "О"), ("п", "П"), ("р", "Р"), ("с", "С"), ("т", "Т"), ("у", "У"), ("ф", "Ф"),
    ("х", "Х"), ("ц", "Ц"), ("ч", "Ч"), ("ш", "Ш"), ("щ", "Щ"), ("ъ", "Ъ"), ("ы", "Ы"),
    ("ь", "Ь"), ("э", "Э"), ("ю", "Ю"), ("я", "Я"), ("ѐ", "Ѐ"), ("ё", "Ё"), ("ђ", "Ђ"),
    ("ѓ", "Ѓ"), ("є", "Є"), ("ѕ", "Ѕ"), ("і", "І"), ("ї", "Ї"), ("ј", "Ј"), ("љ", "Љ"),
    ("њ", "Њ"), ("ћ", "Ћ"), ("ќ", "Ќ"), ("ў", "Ў"), ("џ", "Џ"), ("ґ", "Ґ"), ("ғ", "Ғ"),
    ("ҙ", "Ҙ"), ("қ", "Қ"), ("ҡ", "Ҡ"), ("ң", "Ң"), ("ҫ", "Ҫ"), ("ү", "Ү"), ("ұ", "Ұ"),
    ("ҳ", "Ҳ"), ("һ", "Һ"), ("ӄ", "Ӄ"), ("ӓ", "Ӓ"), ("ӕ", "Ӕ"), ("ә", "Ә"), ("ӣ", "Ӣ"),
    ("ӧ", "Ӧ"), ("ө", "Ө"), ("ӱ", "Ӱ"),
    // Armenian
    ("ա", "Ա"), ("գ", "Գ"), ("ե", "Ե"), ("ի", "Ի"), ("լ", "Լ"), ("ղ", "Ղ"), ("ո", "Ո"),
    ("ս", "Ս"), ("վ", "Վ"), ("տ", "Տ"), ("ր", "Ր"), ("ց", "Ց"),
];
