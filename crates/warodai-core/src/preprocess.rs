pub trait Preprocessor {
    /// Characters stripped from the end of every body line
    fn trailing(&self) -> &[char];

    // Right trim only; the leading numeral marker is the classifier's job
    fn process<'a>(&self, line: &'a str) -> &'a str {
        line.trim_end_matches(self.trailing())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinePreprocessor {
    trailing: Vec<char>,
}

impl LinePreprocessor {
    pub fn new(trailing: &str) -> Self {
        Self {
            trailing: trailing.chars().collect(),
        }
    }
}

impl Preprocessor for LinePreprocessor {
    fn trailing(&self) -> &[char] {
        &self.trailing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1.", "1")]
    #[case("кошка;", "кошка")]
    #[case("кошка, кот. ", "кошка, кот")]
    #[case("перен. хитрец", "перен. хитрец")]
    #[case("猫をかぶる", "猫をかぶる")]
    #[case(" ;,.", "")]
    fn test_trailing_separators_stripped(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(LinePreprocessor::new(";,. ").process(input), expected);
    }

    #[test]
    fn test_custom_trailing_set() {
        let pre = LinePreprocessor::new(";");

        assert_eq!(pre.process("кошка.;;"), "кошка.");
    }
}
