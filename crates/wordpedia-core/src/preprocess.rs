use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor {
    // Default word preprocessor
    fn process(&self, text: &str) -> String {
        let text = text.trim();

        if text.is_empty() {
            return String::new();
        }

        // Unicode normalization (NFKC)
        let text: String = text.nfkc().collect();

        // Line breaks and runs of whitespace collapse to one space
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_compatibility_forms() {
        // Fullwidth latin letters fold to ASCII
        assert_eq!(DefaultPreprocessor.process("ｈａｐｐｙ"), "happy");
    }

    #[test]
    fn collapses_whitespace() {
        assert_eq!(DefaultPreprocessor.process("  ice\r\n  cream \t"), "ice cream");
        assert_eq!(DefaultPreprocessor.process(" \n "), "");
    }
}
