// All assistant prompt constants for the report module.
// Each service that needs assistant calls defines its own prompts.rs
// alongside it.

/// Opens the first message on the thread, ahead of the quiz results.
pub const RESULTS_PREAMBLE: &str = "Here is the results of the test\n";

/// The five instruction fragments sent with the results. Each names the JSON
/// key the assistant must use for that field of the suggestion object.
pub const JOB_FRAGMENT: &str = "What's the best career for the user based off of these results? \
    Make the JSON key for the job \"job\"\n\n";

pub const DESCRIPTION_FRAGMENT: &str = "Write a 3 sentence paragraph explaining what that job \
    entails. Make the JSON key for the description \"description\"\n\n";

pub const JUSTIFICATION_FRAGMENT: &str = "Explain why the job is a good fit for the test taker. \
    Respond as if you were speaking to the test taker. Make the JSON key for the explanation \
    \"justification\"\n\n";

pub const TRAINING_FRAGMENT: &str = "For each career, what training or education is needed? \
    Please make the JSON key for each explanation \"training\"\n\n";

pub const ORGS_FRAGMENT: &str = "For each career, list a couple of organizations that would hire \
    in that field? Make the JSON key for each explanation \"orgs\"";

/// Posted once per follow-up cycle on the same thread.
pub const FOLLOW_UP_PROMPT: &str = "Using the test results from the first message, suggest \
    another career. respond in the same format as the first message";

/// Additional instructions attached to every run. Line breaks inside the
/// reply would break the leading-brace message scan.
pub const RUN_INSTRUCTIONS: &str = "do not use line breaks in your response";

/// Builds the first user message: results text plus the five fragments.
pub fn build_initial_prompt(results: &str) -> String {
    let mut prompt = String::with_capacity(
        RESULTS_PREAMBLE.len()
            + results.len()
            + JOB_FRAGMENT.len()
            + DESCRIPTION_FRAGMENT.len()
            + JUSTIFICATION_FRAGMENT.len()
            + TRAINING_FRAGMENT.len()
            + ORGS_FRAGMENT.len(),
    );
    prompt.push_str(RESULTS_PREAMBLE);
    prompt.push_str(results);
    prompt.push_str(JOB_FRAGMENT);
    prompt.push_str(DESCRIPTION_FRAGMENT);
    prompt.push_str(JUSTIFICATION_FRAGMENT);
    prompt.push_str(TRAINING_FRAGMENT);
    prompt.push_str(ORGS_FRAGMENT);
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_prompt_embeds_results() {
        let prompt = build_initial_prompt("Q1: Question 1\nA1: Response 1\n\n");
        assert!(prompt.starts_with("Here is the results of the test\nQ1: Question 1"));
    }

    #[test]
    fn test_initial_prompt_names_every_json_key() {
        let prompt = build_initial_prompt("results");
        for key in ["\"job\"", "\"description\"", "\"justification\"", "\"training\"", "\"orgs\""] {
            assert!(prompt.contains(key), "prompt should name JSON key {key}");
        }
    }

    #[test]
    fn test_fragments_appear_in_order() {
        let prompt = build_initial_prompt("results");
        let job = prompt.find("\"job\"").unwrap();
        let desc = prompt.find("\"description\"").unwrap();
        let just = prompt.find("\"justification\"").unwrap();
        let train = prompt.find("\"training\"").unwrap();
        let orgs = prompt.find("\"orgs\"").unwrap();
        assert!(job < desc && desc < just && just < train && train < orgs);
    }
}
