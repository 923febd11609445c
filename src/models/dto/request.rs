use serde::Deserialize;
use validator::Validate;

use crate::errors::QuizError;
use crate::models::domain::{CustomQuestion, Student};

/// Teacher-authored question as submitted by the admin panel. Field names
/// match the wire shape (`wrong_option1..3`); the second and third wrong
/// options are optional so a question may carry 2 to 4 options in total.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CustomQuestionRequest {
    #[validate(length(min = 1, max = 200))]
    pub question: String,

    #[validate(range(min = 1))]
    pub correct_answer: i32,

    #[validate(range(min = 1))]
    pub wrong_option1: i32,

    #[validate(range(min = 1))]
    pub wrong_option2: Option<i32>,

    #[validate(range(min = 1))]
    pub wrong_option3: Option<i32>,

    pub operation: String,
    pub difficulty: String,
}

impl CustomQuestionRequest {
    /// Cross-field checks the derive cannot express: option values must be
    /// distinct and none of them may equal the correct answer.
    fn wrong_options(&self) -> Result<Vec<i32>, QuizError> {
        let options: Vec<i32> = [Some(self.wrong_option1), self.wrong_option2, self.wrong_option3]
            .into_iter()
            .flatten()
            .collect();

        for (i, value) in options.iter().enumerate() {
            if *value == self.correct_answer {
                return Err(QuizError::ValidationError(format!(
                    "wrong option {} equals the correct answer",
                    value
                )));
            }
            if options[..i].contains(value) {
                return Err(QuizError::ValidationError(format!(
                    "duplicate wrong option {}",
                    value
                )));
            }
        }

        Ok(options)
    }
}

impl TryFrom<CustomQuestionRequest> for CustomQuestion {
    type Error = QuizError;

    fn try_from(request: CustomQuestionRequest) -> Result<Self, Self::Error> {
        request.validate()?;

        let operation = request.operation.parse()?;
        let difficulty = request.difficulty.parse()?;
        let wrong_options = request.wrong_options()?;

        Ok(CustomQuestion::new(
            &request.question,
            request.correct_answer,
            wrong_options,
            operation,
            difficulty,
        ))
    }
}

/// Student registration as submitted by the sign-in form.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterStudentRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(length(min = 1, max = 50))]
    pub roll_number: String,

    #[validate(length(min = 1, max = 50))]
    #[serde(rename = "class")]
    pub class_name: String,
}

impl TryFrom<RegisterStudentRequest> for Student {
    type Error = QuizError;

    fn try_from(request: RegisterStudentRequest) -> Result<Self, Self::Error> {
        request.validate()?;
        Ok(Student::new(
            &request.name,
            &request.roll_number,
            &request.class_name,
        ))
    }
}
