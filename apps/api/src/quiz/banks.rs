//! Static question banks for the basic and detailed aptitude tests.

use serde::Serialize;

/// One quiz question as served to the client.
#[derive(Debug, Clone, Serialize)]
pub struct Question {
    pub question_text: &'static str,
    pub choices: &'static [&'static str],
}

/// Which question bank a request addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bank {
    Basic,
    Detailed,
}

impl Bank {
    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "basic" => Some(Bank::Basic),
            "detailed" => Some(Bank::Detailed),
            _ => None,
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Bank::Basic => "basic",
            Bank::Detailed => "detailed",
        }
    }

    pub fn questions(self) -> &'static [Question] {
        match self {
            Bank::Basic => BASIC_QUESTIONS,
            Bank::Detailed => DETAILED_QUESTIONS,
        }
    }
}

const AGREEMENT: &[&str] = &[
    "Strongly disagree",
    "Disagree",
    "Neutral",
    "Agree",
    "Strongly agree",
];

const BASIC_QUESTIONS: &[Question] = &[
    Question {
        question_text: "I enjoy solving abstract or technical problems.",
        choices: AGREEMENT,
    },
    Question {
        question_text: "I prefer working with people over working with data or things.",
        choices: AGREEMENT,
    },
    Question {
        question_text: "I like creating things — writing, designing, or building.",
        choices: AGREEMENT,
    },
    Question {
        question_text: "I am comfortable speaking in front of groups.",
        choices: AGREEMENT,
    },
    Question {
        question_text: "I prefer a structured routine over open-ended work.",
        choices: AGREEMENT,
    },
    Question {
        question_text: "I enjoy leading and organizing other people.",
        choices: AGREEMENT,
    },
    Question {
        question_text: "Working outdoors or with my hands appeals to me.",
        choices: AGREEMENT,
    },
    Question {
        question_text: "I would rather analyze a problem than persuade someone.",
        choices: AGREEMENT,
    },
    Question {
        question_text: "Helping others directly is important to me in a job.",
        choices: AGREEMENT,
    },
    Question {
        question_text: "I am motivated more by stability than by high earnings.",
        choices: AGREEMENT,
    },
];

const DETAILED_QUESTIONS: &[Question] = &[
    Question {
        question_text: "Which school subject did you find most engaging?",
        choices: &["Mathematics", "Sciences", "Languages and writing", "Arts", "Social studies"],
    },
    Question {
        question_text: "In a group project, which role do you naturally take?",
        choices: &["Organizer", "Researcher", "Presenter", "Builder", "Mediator"],
    },
    Question {
        question_text: "How do you prefer to learn a new skill?",
        choices: &[
            "Reading documentation",
            "Hands-on experimentation",
            "Being shown by a mentor",
            "Formal coursework",
        ],
    },
    Question {
        question_text: "Which work environment sounds most appealing?",
        choices: &["Office", "Laboratory", "Outdoors", "Workshop or studio", "Remote"],
    },
    Question {
        question_text: "How much does salary matter compared to job satisfaction?",
        choices: AGREEMENT,
    },
    Question {
        question_text: "I enjoy tasks that require sustained attention to detail.",
        choices: AGREEMENT,
    },
    Question {
        question_text: "I am energized by frequent interaction with strangers.",
        choices: AGREEMENT,
    },
    Question {
        question_text: "Describe a project or achievement you are proud of.",
        choices: &[],
    },
    Question {
        question_text: "I would accept a longer commute for more interesting work.",
        choices: AGREEMENT,
    },
    Question {
        question_text: "I prefer deadlines set by others over managing my own time.",
        choices: AGREEMENT,
    },
    Question {
        question_text: "Repetitive but predictable work is acceptable to me.",
        choices: AGREEMENT,
    },
    Question {
        question_text: "I want my work to have a visible impact on my community.",
        choices: AGREEMENT,
    },
    Question {
        question_text: "Which of these would you rather spend a free afternoon on?",
        choices: &[
            "Tinkering with a gadget or program",
            "Reading or writing",
            "Volunteering",
            "Sports or the outdoors",
            "Organizing or planning something",
        ],
    },
    Question {
        question_text: "I handle high-pressure situations well.",
        choices: AGREEMENT,
    },
    Question {
        question_text: "What matters most to you in a first job after graduation?",
        choices: &[
            "Learning opportunities",
            "Salary",
            "Work-life balance",
            "Mission of the organization",
            "Job security",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bank_from_slug() {
        assert_eq!(Bank::from_slug("basic"), Some(Bank::Basic));
        assert_eq!(Bank::from_slug("detailed"), Some(Bank::Detailed));
        assert_eq!(Bank::from_slug("advanced"), None);
    }

    #[test]
    fn test_basic_bank_has_ten_questions() {
        assert_eq!(Bank::Basic.questions().len(), 10);
    }

    #[test]
    fn test_detailed_bank_is_longer_than_basic() {
        assert!(Bank::Detailed.questions().len() > Bank::Basic.questions().len());
    }

    #[test]
    fn test_all_questions_have_text() {
        for bank in [Bank::Basic, Bank::Detailed] {
            for q in bank.questions() {
                assert!(!q.question_text.trim().is_empty());
            }
        }
    }
}
