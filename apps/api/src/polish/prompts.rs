// Prompts for resume polishing.
// The output is fed straight back into the classifier, so the formatting directive asks for
// the markers it recognises: `*` headings, `-` bullets, the name on the first line.

/// Appended to every polish prompt.
pub const FORMAT_DIRECTIVE: &str = "MAKE SURE NOT TO INCLUDE ANY EXPLANATORY TEXT BEFORE AND AFTER THE RESUME CONTENT. \
USE * TO INDICATE HEADINGS AND - TO INDICATE BULLET POINTS. \
ALWAYS START WITH THE NAME IN FIRST LINE";

/// Polish prompt that follows caller-supplied instructions.
pub fn polish_with_instructions(position_name: &str, resume_content: &str, instructions: &str) -> String {
    format!(
        "Given the resume content: '{resume_content}', polish it based on the following \
         instructions: {instructions} for the {position_name} position. {FORMAT_DIRECTIVE}"
    )
}

/// Default polish prompt when no instructions were given.
pub fn polish_for_position(position_name: &str, resume_content: &str) -> String {
    format!(
        "Suggest improvements for the following resume content: '{resume_content}' to better \
         align with the requirements and expectations of a {position_name} position. Return the \
         polished version, highlighting necessary adjustments for clarity, relevance, and impact \
         in relation to the targeted role. {FORMAT_DIRECTIVE}"
    )
}
