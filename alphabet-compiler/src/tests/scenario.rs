mod scenario_tests {
    use crate::{
        CharClass, CharSetDef, CompileError, Config, Definition, DefinitionKind, LanguageDef,
        Override, SetRef, Step, TranslitDef, TranslitRef, TranslitTable, compile,
    };

    #[rustfmt::skip]
    const VOWELS: &[char] = &[
        'а', 'е', 'ё', 'и', 'о', 'у', 'ы', 'э', 'ю', 'я',
    ];

    #[rustfmt::skip]
    const CONSONANTS: &[char] = &[
        'б', 'в', 'г', 'д', 'ж', 'з', 'й', 'к', 'л', 'м', 'н', 'п',
        'р', 'с', 'т', 'ф', 'х', 'ц', 'ч', 'ш', 'щ', 'ъ', 'ь',
        'Б', 'В', 'Г', 'Д', 'Ж', 'З', 'Й', 'К', 'Л', 'М',
    ];

    fn small_config() -> Config {
        Config::default().with_lowercase_range(0x41..=0x5A)
    }

    fn rus_bel() -> Vec<Definition> {
        vec![
            CharSetDef::chars("VOWELS", VOWELS).into(),
            CharSetDef::chars("CONSONANTS", CONSONANTS).into(),
            LanguageDef::new("rus", "russian")
                .required(vec![SetRef::named("VOWELS")])
                .normal(vec![SetRef::named("CONSONANTS")])
                .into(),
            LanguageDef::new("bel", "belarusian")
                .required(vec![SetRef::named("VOWELS")])
                .normal(vec![SetRef::derived(
                    "CONSONANTS",
                    &['ц', 'щ', 'ъ'],
                    &['ў', 'ґ'],
                )])
                .into(),
        ]
    }

    #[test]
    fn shared_subset_is_one_table() {
        let artifact = compile(&rus_bel(), &small_config()).unwrap();
        let rus = artifact.descriptor("rus").unwrap();
        let bel = artifact.descriptor("bel").unwrap();
        assert_ne!(rus, bel);

        assert_eq!(rus.class(CharClass::Required), bel.class(CharClass::Required));

        let rus_normal = rus.class(CharClass::Normal);
        let bel_normal = bel.class(CharClass::Normal);
        assert_eq!(rus_normal.len(), 2);
        assert_eq!(bel_normal.len(), 2);
        assert_eq!(rus_normal[0], bel_normal[0]);
        assert_ne!(rus_normal[1], bel_normal[1]);

        let sets = artifact.char_sets();
        assert_eq!(sets[rus_normal[0]].units.len(), 30);
        assert_eq!(sets[rus_normal[1]].units, ["ц", "щ", "ъ"]);
        assert_eq!(sets[bel_normal[1]].units, ["ў", "ґ"]);
        assert_eq!(artifact.class_units(rus, CharClass::Normal).len(), 33);
        assert_eq!(artifact.class_units(bel, CharClass::Normal).len(), 32);
    }

    #[test]
    fn split_blocks_are_numbered() {
        let artifact = compile(&rus_bel(), &small_config()).unwrap();
        let names: Vec<&str> = artifact.char_sets().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            ["VOWELS", "CONSONANTS/1", "CONSONANTS/2", "bel.normal#0+"]
        );
    }

    #[test]
    fn classification_round_trip() {
        let mut defs = rus_bel();
        defs.push(
            LanguageDef::new("ukr", "ukrainian")
                .required(vec![SetRef::named("VOWELS")])
                .alien(vec![SetRef::chars(&['a', 'e'])])
                .into(),
        );
        let artifact = compile(&defs, &small_config()).unwrap();
        let ukr = artifact.descriptor("ukr").unwrap();
        assert_eq!(artifact.classify(ukr, "я"), Some(CharClass::Required));
        assert_eq!(artifact.classify(ukr, "a"), Some(CharClass::Alien));
        assert_eq!(artifact.classify(ukr, "z"), None);
    }

    #[test]
    fn undeclared_override_base_fails_without_artifact() {
        let mut defs = rus_bel();
        defs.push(
            LanguageDef::new("tst", "test")
                .required(vec![SetRef::named("VOWELS")])
                .secondary_override("xyz", Vec::new())
                .into(),
        );
        let err = compile(&defs, &small_config()).unwrap_err();
        assert_eq!(
            err,
            CompileError::UndefinedReference {
                kind: DefinitionKind::Language,
                name: "xyz".into(),
                referrer: "tst".into(),
            }
        );
    }

    #[test]
    fn sparse_override_copies_base_fields() {
        let x = TranslitTable::from_pairs([("q", "k")]);
        let defs: Vec<Definition> = vec![
            CharSetDef::chars("LATIN_VOWELS", &['a', 'e', 'i', 'o', 'u']).into(),
            CharSetDef::chars("LATIN_CONSONANTS", &['b', 'c', 'd']).into(),
            TranslitDef::literal("X", x.clone()).into(),
            TranslitDef::literal("APOSTROPHE", TranslitTable::from_pairs([("’", "'")])).into(),
            LanguageDef::new("eng", "english")
                .required(vec![SetRef::named("LATIN_VOWELS")])
                .normal(vec![SetRef::named("LATIN_CONSONANTS")])
                .converter("APOSTROPHE")
                .into(),
            LanguageDef::new("tst", "test")
                .required(vec![SetRef::named("LATIN_VOWELS")])
                .secondary_override(
                    "eng",
                    vec![Override::Step(Step::PreConverter, TranslitRef::named("X"))],
                )
                .into(),
        ];
        let artifact = compile(&defs, &small_config()).unwrap();
        let eng = artifact.descriptor("eng").unwrap();
        let sec = artifact.secondary("tst").unwrap();

        assert_eq!(sec.code, "eng");
        assert_eq!(sec.display_name, eng.display_name);
        assert_eq!(sec.classes, eng.classes);
        assert_eq!(sec.diacritics, eng.diacritics);
        for step in Step::ALL {
            if step != Step::PreConverter {
                assert_eq!(sec.step(step), eng.step(step), "{step}");
            }
        }
        let pre = sec.step(Step::PreConverter).unwrap();
        assert_eq!(artifact.translit(pre), &x);
        assert_eq!(eng.step(Step::PreConverter), None);
    }

    #[test]
    fn secondary_precedes_its_primary() {
        let mut defs = rus_bel();
        defs.push(
            LanguageDef::new("tst", "test")
                .required(vec![SetRef::named("VOWELS")])
                .secondary_override("rus", Vec::new())
                .into(),
        );
        let artifact = compile(&defs, &small_config()).unwrap();
        let codes: Vec<&str> = artifact.codes().collect();
        assert_eq!(codes, ["rus", "bel", "tst"]);

        let descriptors = artifact.descriptors();
        assert_eq!(descriptors.len(), 4);
        assert_eq!(descriptors[3].code, "tst");
        assert_eq!(descriptors[3].secondary, Some(2));
        assert_eq!(descriptors[2].code, "rus");
        assert_eq!(descriptors[2].display_name, "russian");
        assert_eq!(descriptors[2].classes, descriptors[0].classes);
    }

    #[test]
    fn override_cycle_is_detected() {
        let defs: Vec<Definition> = vec![
            CharSetDef::chars("V", &['a']).into(),
            LanguageDef::new("aaa", "a")
                .required(vec![SetRef::named("V")])
                .secondary_override("bbb", Vec::new())
                .into(),
            LanguageDef::new("bbb", "b")
                .required(vec![SetRef::named("V")])
                .secondary_override("aaa", Vec::new())
                .into(),
        ];
        let err = compile(&defs, &small_config()).unwrap_err();
        assert_eq!(
            err,
            CompileError::CyclicReference {
                path: vec!["aaa".into(), "bbb".into(), "aaa".into()],
            }
        );
    }

    #[test]
    fn translit_cycle_is_detected() {
        let defs: Vec<Definition> = vec![
            TranslitDef::compose("A", &["B"]).into(),
            TranslitDef::merge("B", &["C", "A"]).into(),
            TranslitDef::literal("C", TranslitTable::new()).into(),
        ];
        let err = compile(&defs, &small_config()).unwrap_err();
        assert!(matches!(err, CompileError::CyclicReference { ref path } if path.len() == 3));
    }

    #[test]
    fn overlapping_classes_are_rejected() {
        let defs: Vec<Definition> = vec![
            LanguageDef::new("tst", "test")
                .required(vec![SetRef::chars(&['a', 'b'])])
                .normal(vec![SetRef::chars(&['b', 'c'])])
                .into(),
        ];
        let err = compile(&defs, &small_config()).unwrap_err();
        assert_eq!(
            err,
            CompileError::ClassOverlap {
                code: "tst".into(),
                unit: "b".into(),
                first: CharClass::Required,
                second: CharClass::Normal,
            }
        );
    }

    #[test]
    fn identical_contents_are_emitted_once() {
        let defs: Vec<Definition> = vec![
            TranslitDef::literal("FIRST", TranslitTable::from_pairs([("x", "y")])).into(),
            TranslitDef::literal("SECOND", TranslitTable::from_pairs([("x", "y")])).into(),
            LanguageDef::new("one", "one")
                .required(vec![SetRef::chars(&['x', 'y', 'z'])])
                .converter("FIRST")
                .into(),
            LanguageDef::new("two", "two")
                .required(vec![SetRef::chars(&['x', 'y', 'z'])])
                .converter("SECOND")
                .into(),
        ];
        let artifact = compile(&defs, &small_config()).unwrap();
        assert_eq!(artifact.char_sets().len(), 1);
        // Generic lowercase plus one converter.
        assert_eq!(artifact.translits().len(), 2);
        assert_eq!(artifact.translits()[1].name, "FIRST");

        let one = artifact.descriptor("one").unwrap();
        let two = artifact.descriptor("two").unwrap();
        assert_eq!(one.classes, two.classes);
        assert_eq!(one.step(Step::Converter), two.step(Step::Converter));
    }

    #[test]
    fn merged_identity_overrides_earlier_mapping() {
        let defs: Vec<Definition> = vec![
            TranslitDef::literal("FOLD", TranslitTable::from_pairs([("x", "y"), ("z", "y")]))
                .into(),
            TranslitDef::literal("KEEP_X", TranslitTable::from_pairs([("x", "x")])).into(),
            TranslitDef::merge("CONVERTER", &["FOLD", "KEEP_X"]).into(),
            LanguageDef::new("tst", "test")
                .required(vec![SetRef::chars(&['x', 'y', 'z'])])
                .converter("CONVERTER")
                .into(),
        ];
        let artifact = compile(&defs, &small_config()).unwrap();
        let tst = artifact.descriptor("tst").unwrap();
        let converter = artifact.translit(tst.step(Step::Converter).unwrap());
        assert_eq!(converter.apply("xz"), "xy");
        assert_eq!(converter.lookup("x"), None);
        assert_eq!(converter.pins().count(), 0);
    }

    #[test]
    fn unicode_lowercase_body_dedups_with_generic() {
        let defs: Vec<Definition> = vec![
            TranslitDef::unicode_lowercase("LOWER").into(),
            LanguageDef::new("tst", "test")
                .required(vec![SetRef::chars(&['a'])])
                .converter("LOWER")
                .into(),
        ];
        let artifact = compile(&defs, &small_config()).unwrap();
        assert_eq!(artifact.translits().len(), 1);
        assert_eq!(artifact.translits()[0].name, "GENERIC_LOWERCASE");
        let tst = artifact.descriptor("tst").unwrap();
        assert_eq!(tst.step(Step::Converter), Some(0));
        assert_eq!(artifact.generic_lowercase().lookup("Q"), Some("q"));
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let defs: Vec<Definition> = vec![
            CharSetDef::chars("A", &['a']).into(),
            CharSetDef::chars("A", &['b']).into(),
        ];
        assert_eq!(
            compile(&defs, &small_config()).unwrap_err(),
            CompileError::DuplicateDefinition {
                kind: DefinitionKind::CharSet,
                name: "A".into(),
            }
        );

        let defs: Vec<Definition> =
            vec![TranslitDef::literal("GENERIC_LOWERCASE", TranslitTable::new()).into()];
        assert!(matches!(
            compile(&defs, &small_config()),
            Err(CompileError::DuplicateDefinition { kind: DefinitionKind::Translit, .. })
        ));
    }

    #[test]
    fn language_code_must_be_three_letters() {
        for code in ["en", "ENG", "engl", "e1g"] {
            let defs: Vec<Definition> = vec![LanguageDef::new(code, "bad").into()];
            assert!(
                matches!(
                    compile(&defs, &small_config()),
                    Err(CompileError::MalformedDefinition { .. })
                ),
                "{code}"
            );
        }
    }

    #[test]
    fn undefined_set_names_its_referrer() {
        let defs: Vec<Definition> = vec![
            LanguageDef::new("tst", "test")
                .required(vec![SetRef::named("NOPE")])
                .into(),
        ];
        assert_eq!(
            compile(&defs, &small_config()).unwrap_err(),
            CompileError::UndefinedReference {
                kind: DefinitionKind::CharSet,
                name: "NOPE".into(),
                referrer: "tst.required".into(),
            }
        );
    }

    #[test]
    fn render_can_omit_names() {
        let artifact = compile(&rus_bel(), &small_config()).unwrap();
        let named = artifact.render(&small_config());
        let anonymous = artifact.render(&small_config().with_emit_names(false));
        assert!(named.contains("\"CONSONANTS/1\""));
        assert!(!anonymous.contains("CONSONANTS"));
        assert_eq!(named.lines().count(), anonymous.lines().count());
    }
}
