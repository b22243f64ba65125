#[cfg(test)]
mod artifact_tests {
    use crate::CharClass;
    use crate::data::{ALPHABETS, CHAR_SETS, CODES, DIACRITICS, TRANSLITS};
    use alphabet_compiler::{Artifact, Config, builtin, compile, verify};
    use std::sync::LazyLock;

    static GENERATED: &str = include_str!(concat!(env!("OUT_DIR"), "/alphabets.rs"));

    static FRESH: LazyLock<Artifact> = LazyLock::new(|| {
        compile(&builtin::definitions(), &Config::default()).expect("builtin alphabets compile")
    });

    #[test]
    fn generated_module_matches_a_fresh_compile() {
        assert_eq!(verify(GENERATED, &FRESH.render(&Config::default())), Ok(()));
    }

    #[test]
    fn codes_and_descriptors_line_up() {
        let fresh: Vec<&str> = FRESH.codes().collect();
        assert_eq!(CODES, fresh.as_slice());
        assert_eq!(ALPHABETS.len(), FRESH.descriptors().len());
        assert_eq!(CHAR_SETS.len(), FRESH.char_sets().len());
        assert_eq!(TRANSLITS.len(), FRESH.translits().len());
        assert_eq!(DIACRITICS.len(), FRESH.diacritics().len());
    }

    #[test]
    fn class_units_survive_emission() {
        for (runtime, compiled) in ALPHABETS.iter().zip(FRESH.descriptors()) {
            assert_eq!(runtime.code(), compiled.code);
            assert_eq!(runtime.name(), compiled.display_name);
            let classes = CharClass::DECLARED
                .into_iter()
                .zip(alphabet_compiler::CharClass::ALL);
            for (class, compiled_class) in classes {
                let emitted: Vec<String> = runtime
                    .char_sets(class)
                    .flat_map(|set| set.units())
                    .map(|unit| unit.into_owned())
                    .collect();
                let expected = FRESH.class_units(compiled, compiled_class);
                assert_eq!(emitted, expected, "{} {class}", compiled.code);
                for unit in &expected {
                    assert_eq!(runtime.classify_unit(unit), class, "{} {unit:?}", compiled.code);
                }
            }
        }
    }

    #[test]
    fn translit_tables_survive_emission() {
        for (runtime, compiled) in TRANSLITS.iter().zip(FRESH.translits()) {
            assert_eq!(runtime.name(), compiled.name);
            for (from, to) in compiled.table.mappings() {
                assert_eq!(runtime.lookup(from), Some(to), "{} {from:?}", compiled.name);
            }
            for unit in compiled.table.removals() {
                assert_eq!(runtime.lookup(unit), Some(""), "{} {unit:?}", compiled.name);
            }
            for sample in ["Ёлка\u{301}", "Straße’s", "İSTANBUL", "Cop", "\u{218}coal\u{103}"] {
                assert_eq!(runtime.apply_str(sample), compiled.table.apply(sample));
            }
        }
    }

    #[test]
    fn diacritics_survive_emission() {
        for (runtime, compiled) in DIACRITICS.iter().zip(FRESH.diacritics()) {
            assert_eq!(runtime.bases().count(), compiled.entries.len());
            for (base, candidates) in &compiled.entries {
                assert_eq!(runtime.candidates(base), candidates.as_slice());
            }
        }
    }
}
