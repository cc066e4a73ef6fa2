//! Resume polishing through the upstream text generator.

pub mod handlers;
pub mod prompts;

use crate::llm_client::{LlmError, TextGenerator};

/// Asks the generator for a polished resume aimed at `position_name`.
///
/// Blank `instructions` are treated as absent.
pub async fn polish_resume(
    llm: &dyn TextGenerator,
    position_name: &str,
    resume_content: &str,
    instructions: Option<&str>,
) -> Result<String, LlmError> {
    let prompt = match instructions.map(str::trim).filter(|i| !i.is_empty()) {
        Some(instructions) => {
            prompts::polish_with_instructions(position_name, resume_content, instructions)
        }
        None => prompts::polish_for_position(position_name, resume_content),
    };
    llm.complete(&prompt).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Records the last prompt and echoes a fixed reply.
    #[derive(Default)]
    struct RecordingGenerator {
        last_prompt: Mutex<Option<String>>,
    }

    #[async_trait]
    impl TextGenerator for RecordingGenerator {
        async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
            *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
            Ok("Jane Doe\n*EXPERIENCE*\n- Built X".to_string())
        }
    }

    impl RecordingGenerator {
        fn prompt(&self) -> String {
            self.last_prompt.lock().unwrap().clone().unwrap()
        }
    }

    #[tokio::test]
    async fn test_instructions_select_instruction_prompt() {
        let llm = RecordingGenerator::default();
        let polished = polish_resume(&llm, "Data Analyst", "Jane Doe", Some("be concise"))
            .await
            .unwrap();
        assert!(polished.starts_with("Jane Doe"));

        let prompt = llm.prompt();
        assert!(prompt.starts_with("Given the resume content: 'Jane Doe'"));
        assert!(prompt.contains("instructions: be concise for the Data Analyst position."));
        assert!(prompt.ends_with(prompts::FORMAT_DIRECTIVE));
    }

    #[tokio::test]
    async fn test_blank_instructions_fall_back_to_default_prompt() {
        let llm = RecordingGenerator::default();
        polish_resume(&llm, "Data Analyst", "Jane Doe", Some("   "))
            .await
            .unwrap();
        let prompt = llm.prompt();
        assert!(prompt.starts_with("Suggest improvements for the following resume content: 'Jane Doe'"));
        assert!(prompt.contains("a Data Analyst position."));
        assert!(prompt.ends_with(prompts::FORMAT_DIRECTIVE));
    }

    #[tokio::test]
    async fn test_upstream_error_is_passed_through() {
        struct Failing;

        #[async_trait]
        impl TextGenerator for Failing {
            async fn complete(&self, _prompt: &str) -> Result<String, LlmError> {
                Err(LlmError::Api {
                    status: 429,
                    body: "rate limited".to_string(),
                })
            }
        }

        let err = polish_resume(&Failing, "Data Analyst", "Jane Doe", None)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Error: 429 - rate limited");
    }
}
