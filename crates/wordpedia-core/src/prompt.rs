/// Sent once per session to check the API key
pub const VALIDATION_PROMPT: &str = "hello";

/// Strict-JSON request for synonym and antonym candidates
pub fn candidate_prompt(word: &str, count: usize) -> String {
    format!(
        "Give me {count} synonyms and {count} antonyms for the word '{word}'.\n\
         Return STRICT JSON with this structure:\n\
         {{\n  \"synonyms\": [\"word1\", \"word2\", ...],\n  \"antonyms\": [\"word1\", \"word2\", ...]\n}}\n\
         Do NOT add any extra information, ONLY return the JSON."
    )
}

/// Free-text request for a dictionary definition and the word's origin
pub fn definition_prompt(word: &str) -> String {
    format!(
        "Provide a detailed wordpedia for the word '{word}' including:\n\n\
         - Definition from Cambridge Dictionary\n\
         - Origin of the word\n\n\
         Format the response as:\n\
         1. Definition (paragraph)\n\
         2. Origin (paragraph)"
    )
}
