/// Wraps the serialized roster and the instruction into the editing prompt.
pub fn build_edit_prompt(csv: &str, instruction: &str) -> String {
    format!(
        "You are an expert CSV editor.\n\
         Here is a user list CSV:\n\
         {csv}\n\n\
         Apply this instruction: {instruction}\n\
         Output ONLY the full edited CSV - do not add any explanation."
    )
}
