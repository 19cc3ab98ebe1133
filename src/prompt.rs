// Prompt construction for the prerequisite-concepts request. The
// template is fixed; the only variable part is the topic the user
// typed, which is interpolated verbatim (no sanitization, per the
// prototype's contract).

/// Build the instruction sent to the model for `topic`. Asks for the
/// top 3 prerequisite concepts, each with a heading and a one-sentence
/// beginner definition, laid out as markdown.
pub fn build_prompt(topic: &str) -> String {
    format!(
        "Identify the top 3 most important prerequisite concepts needed BEFORE learning \"{topic}\".\n\
         \n\
         For each concept, provide:\n\
         1. The Concept Name (as a heading).\n\
         2. A simple, 1-sentence definition for a beginner.\n\
         \n\
         Format the response clearly using Markdown."
    )
}
