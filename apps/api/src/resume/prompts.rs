// All LLM prompts for the resume helpers. Rendered in a single pass; field values
// are inserted exactly as received.

/// Professional summary prompt built around the candidate's existing summary.
pub fn generate_summary_prompt(existing_summary: &str, role: &str, experience_level: &str) -> String {
    format!(
        r#"Write a professional resume summary of 3-5 sentences for a {experience_level} {role}.

Use the existing summary below as a starting point. Keep what is accurate, strengthen the wording, and highlight the experience most relevant to the role.

Existing summary:
{existing_summary}

Return only the summary text, with no heading or commentary."#
    )
}

/// Skills optimisation prompt; asks for a comma-separated list only.
pub fn optimize_skills_prompt(current_skills: &str, job_description_keywords: &str) -> String {
    format!(
        r#"Optimize a resume skills section for a specific job.

Current skills:
{current_skills}

Job description keywords:
{job_description_keywords}

Return 5-10 skills as a single comma-separated list, drawn from the current skills and phrased to match the job description keywords where they genuinely overlap. Return only the comma-separated list."#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_prompt_fills_role_and_level() {
        let prompt = generate_summary_prompt("I write code.", "Backend Engineer", "senior");
        assert!(prompt.starts_with("Write a professional resume summary of 3-5 sentences for a senior Backend Engineer."));
        assert!(prompt.contains("Existing summary:\nI write code.\n"));
    }

    #[test]
    fn test_skills_prompt_lists_both_inputs() {
        let prompt = optimize_skills_prompt("Rust, SQL", "distributed systems, Kafka");
        assert!(prompt.contains("Current skills:\nRust, SQL\n"));
        assert!(prompt.contains("Job description keywords:\ndistributed systems, Kafka\n"));
        assert!(prompt.contains("5-10 skills"));
    }

    #[test]
    fn test_summary_fields_are_inserted_verbatim() {
        let prompt = generate_summary_prompt("Real summary.", "{existing_summary}", "{role}");
        assert!(prompt.contains("for a {role} {existing_summary}.\n"));
        assert!(prompt.contains("Existing summary:\nReal summary.\n"));
    }

    #[test]
    fn test_skills_field_is_inserted_verbatim() {
        let prompt = optimize_skills_prompt("{job_description_keywords}", "Kafka");
        assert!(prompt.contains("Current skills:\n{job_description_keywords}\n"));
        assert!(prompt.contains("Job description keywords:\nKafka\n"));
    }

    #[test]
    fn test_prompts_are_deterministic() {
        assert_eq!(
            optimize_skills_prompt("Go", "cloud"),
            optimize_skills_prompt("Go", "cloud")
        );
        assert_eq!(
            generate_summary_prompt("x", "y", "z"),
            generate_summary_prompt("x", "y", "z")
        );
    }
}
