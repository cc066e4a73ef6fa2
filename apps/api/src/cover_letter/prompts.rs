// Cover letter prompt. The model is told to stay within the resume so that requirements
// from the job description are not claimed as experience.

pub fn cover_letter(
    company_name: &str,
    position_name: &str,
    job_description: &str,
    resume_content: &str,
) -> String {
    format!(
        "Generate a customized cover letter using the company name: {company_name}, the position \
         applied for: {position_name}, and the job description: {job_description}. Ensure the \
         cover letter highlights my qualifications and experience as detailed in the resume \
         content: {resume_content}. Adapt the content carefully to avoid including experiences \
         not present in my resume but mentioned in the job description. The goal is to emphasize \
         the alignment between my existing skills and the requirements of the role."
    )
}
