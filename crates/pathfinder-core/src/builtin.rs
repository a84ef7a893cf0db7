//! The built-in "Career Aptitude" assessment.

use crate::careers::CareerMap;
use crate::model::{Assessment, Question, QuestionBank};

pub const CAREER_APTITUDE_ID: &str = "career-aptitude";

fn question(id: u32, prompt: &str, category: &str, options: [&str; 4]) -> Question {
    Question {
        id,
        prompt: prompt.to_string(),
        options: options.iter().map(|o| (*o).to_string()).collect(),
        category: category.to_string(),
    }
}

/// The five-question aptitude quiz with the default career table.
pub fn career_aptitude() -> Assessment {
    let questions = vec![
        question(
            1,
            "Which activity do you find most engaging?",
            "interests",
            [
                "Solving complex mathematical problems",
                "Creating art or writing stories",
                "Helping others solve their problems",
                "Building or fixing things with your hands",
            ],
        ),
        question(
            2,
            "In a group project, you prefer to:",
            "skills",
            [
                "Lead the team and coordinate tasks",
                "Research and analyze information",
                "Present findings to the group",
                "Support team members and ensure harmony",
            ],
        ),
        question(
            3,
            "Your ideal work environment would be:",
            "environment",
            [
                "A quiet office with minimal distractions",
                "A collaborative space with lots of interaction",
                "Outdoors or different locations",
                "A laboratory or workshop setting",
            ],
        ),
        question(
            4,
            "Which subject did you enjoy most in school?",
            "academics",
            [
                "Mathematics and Physics",
                "Literature and History",
                "Biology and Chemistry",
                "Arts and Music",
            ],
        ),
        question(
            5,
            "When facing a problem, you typically:",
            "problem-solving",
            [
                "Break it down into smaller, logical steps",
                "Brainstorm creative solutions",
                "Seek advice from others",
                "Use trial and error approach",
            ],
        ),
    ];

    let bank = QuestionBank::new(
        CAREER_APTITUDE_ID,
        "Career Aptitude",
        "Five questions that sketch your strengths profile",
        questions,
    )
    .expect("built-in question bank satisfies construction rules");

    Assessment::new(bank, CareerMap::default())
}
