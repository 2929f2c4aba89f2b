//! vitest: the same jest-compatible JSON reporter shape, routed
//! separately only because `bun test`/`vitest` command detection needs
//! to win over the generic jest-family pattern before parsing happens.

pub fn parse(output: &str) -> Vec<witness_core::facts::Fact> {
    super::jest::parse(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_shared_structured_shape() {
        let output = r#"{"testResults":[{"assertionResults":[
            {"fullName":"a test","status":"passed"}
        ]}]}"#;
        assert_eq!(parse(output).len(), 1);
    }
}
