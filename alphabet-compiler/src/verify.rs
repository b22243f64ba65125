use crate::error::VerifyError;

/// Compare a regenerated artifact against the canonical copy, byte for byte.
///
/// The error names the first differing line (1-based). A missing trailing
/// line shows up as an empty `found`/`expected` on the line past the end.
pub fn verify(canonical: &str, regenerated: &str) -> Result<(), VerifyError> {
    if canonical == regenerated {
        return Ok(());
    }
    let mut expected = canonical.split('\n');
    let mut found = regenerated.split('\n');
    let mut line = 1;
    loop {
        match (expected.next(), found.next()) {
            (Some(e), Some(f)) if e == f => line += 1,
            (e, f) => {
                return Err(VerifyError::ArtifactMismatch {
                    line,
                    expected: e.unwrap_or_default().to_owned(),
                    found: f.unwrap_or_default().to_owned(),
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_artifacts_pass() {
        assert_eq!(verify("a\nb\n", "a\nb\n"), Ok(()));
    }

    #[test]
    fn reports_first_differing_line() {
        let err = verify("a\nb\nc\n", "a\nB\nc\n").unwrap_err();
        assert_eq!(
            err,
            VerifyError::ArtifactMismatch {
                line: 2,
                expected: "b".into(),
                found: "B".into(),
            }
        );
    }

    #[test]
    fn truncated_artifact_is_a_mismatch() {
        let err = verify("a\nb\n", "a\n").unwrap_err();
        assert!(matches!(err, VerifyError::ArtifactMismatch { line: 2, .. }));
    }
}
