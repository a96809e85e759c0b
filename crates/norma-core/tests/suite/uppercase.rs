use norma_core::{decode, encode, to_upper, to_upper_bytes, CaseMap};

#[test]
fn covers_several_hundred_letters() {
    assert!(CaseMap::builtin().len() > 300);
}

#[test]
fn builtin_entries_agree_with_unicode_simple_uppercase() {
    for (lower, upper) in CaseMap::builtin().iter() {
        let expected: Vec<char> = lower.to_uppercase().collect();
        assert_eq!(expected, vec![upper], "{lower:?}");
    }
}

#[test]
fn uppercased_letters_are_not_remapped() {
    let map = CaseMap::builtin();
    for (_, upper) in map.iter() {
        assert_eq!(map.to_upper_codepoint(upper), upper, "{upper:?}");
    }
}

#[test]
fn european_sentences() {
    let cases = [
        ("le cœur déçu mais l'âme plutôt naïve", "LE CŒUR DÉÇU MAIS L'ÂME PLUTÔT NAÏVE"),
        ("zażółć gęślą jaźń", "ZAŻÓŁĆ GĘŚLĄ JAŹŃ"),
        ("árvíztűrő tükörfúrógép", "ÁRVÍZTŰRŐ TÜKÖRFÚRÓGÉP"),
        ("ξεσκεπάζω την ψυχή", "ΞΕΣΚΕΠΆΖΩ ΤΗΝ ΨΥΧΉ"),
        ("съешь же ещё этих мягких булок", "СЪЕШЬ ЖЕ ЕЩЁ ЭТИХ МЯГКИХ БУЛОК"),
        ("їжак ґанок", "ЇЖАК ҐАНОК"),
    ];
    for (input, expected) in cases {
        assert_eq!(to_upper(input), expected);
    }
}

#[test]
fn leaves_unmapped_text_untouched() {
    for input in ["", "123 + 456 = 579!", "ALREADY UPPER", "日本語テキスト", "🦀🦀", "ΑΒΓ"] {
        assert_eq!(to_upper(input), input);
    }
}

#[test]
fn bytes_and_codec_agree_on_valid_input() {
    let text = "grüße aus köln";
    let via_codec: Vec<char> = decode(text.as_bytes())
        .into_iter()
        .map(|c| CaseMap::builtin().to_upper_codepoint(c))
        .collect();
    assert_eq!(encode(&via_codec), to_upper_bytes(text.as_bytes()));
    assert_eq!(to_upper_bytes(text.as_bytes()), to_upper(text).into_bytes());
}
