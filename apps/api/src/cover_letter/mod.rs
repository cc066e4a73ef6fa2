//! Cover letter drafting through the upstream text generator.

pub mod handlers;
pub mod prompts;

use crate::llm_client::{LlmError, TextGenerator};

/// Inputs for one cover letter. All four are required by the handler.
#[derive(Debug, Clone, Copy)]
pub struct CoverLetterInput<'a> {
    pub company_name: &'a str,
    pub position_name: &'a str,
    pub job_description: &'a str,
    pub resume_content: &'a str,
}

pub async fn generate_cover_letter(
    llm: &dyn TextGenerator,
    input: CoverLetterInput<'_>,
) -> Result<String, LlmError> {
    let prompt = prompts::cover_letter(
        input.company_name,
        input.position_name,
        input.job_description,
        input.resume_content,
    );
    llm.complete(&prompt).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    /// Replies with the prompt it was given.
    struct EchoGenerator;

    #[async_trait]
    impl TextGenerator for EchoGenerator {
        async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
            Ok(prompt.to_string())
        }
    }

    #[tokio::test]
    async fn test_prompt_carries_every_input() {
        let input = CoverLetterInput {
            company_name: "Acme",
            position_name: "Data Analyst",
            job_description: "SQL and dashboards",
            resume_content: "Jane Doe, analyst",
        };
        let prompt = generate_cover_letter(&EchoGenerator, input).await.unwrap();
        assert!(prompt.contains("company name: Acme"));
        assert!(prompt.contains("position applied for: Data Analyst"));
        assert!(prompt.contains("job description: SQL and dashboards."));
        assert!(prompt.contains("resume content: Jane Doe, analyst."));
        assert!(prompt.contains("avoid including experiences not present in my resume"));
    }
}
