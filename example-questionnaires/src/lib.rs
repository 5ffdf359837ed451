//! Sample questionnaires, authored the way a UI would author them: by
//! dispatching intents against a [`questionnaire::Store`].

pub mod course_feedback;
pub mod sample_catalog;
pub mod team_lunch;

pub use course_feedback::author_course_feedback;
pub use sample_catalog::sample_catalog;
pub use team_lunch::{author_team_lunch, release_team_lunch};
