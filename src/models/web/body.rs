use {
    std::ops::RangeInclusive,
    serde::Deserialize,
    thiserror::Error,
    crate::models::quiz::{Round, CategoryFilter},
    super::lenient
};

pub const DIFFICULTIES: RangeInclusive<i32> = 1..=5;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Invalid {
    #[error("missing field `{0}`")]
    Missing(&'static str),
    #[error("field `{0}` must not be blank")]
    Blank(&'static str),
    #[error("difficulty {0} is outside of {min}..={max}", min = DIFFICULTIES.start(), max = DIFFICULTIES.end())]
    Difficulty(i32),
    #[error("category {0} does not exist")]
    UnknownCategory(i32)
}

/// Body of `POST /questions`. Every field is optional on the wire and
/// checked by [`QuestionBody::validate`].
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct QuestionBody {
    pub question: Option<String>,
    pub answer: Option<String>,
    #[serde(deserialize_with = "lenient::optional_int")]
    pub category: Option<i32>,
    #[serde(deserialize_with = "lenient::optional_int")]
    pub difficulty: Option<i32>
}

#[derive(Debug, PartialEq, Eq)]
pub struct ValidQuestion {
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32
}

impl QuestionBody {
    /// Checks everything that doesn't need the store. Whether the category
    /// exists is left to the caller.
    pub fn validate(self) -> Result<ValidQuestion, Invalid> {
        let question = non_blank(self.question, "question")?;
        let answer = non_blank(self.answer, "answer")?;
        let category = self.category.ok_or(Invalid::Missing("category"))?;
        let difficulty = self.difficulty.ok_or(Invalid::Missing("difficulty"))?;

        if !DIFFICULTIES.contains(&difficulty) {
            return Err(Invalid::Difficulty(difficulty))
        }

        Ok(ValidQuestion {
            question,
            answer,
            category,
            difficulty
        })
    }
}

fn non_blank(field: Option<String>, name: &'static str) -> Result<String, Invalid> {
    let value = field.ok_or(Invalid::Missing(name))?;
    if value.trim().is_empty() {
        return Err(Invalid::Blank(name))
    }
    Ok(value)
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct SearchBody {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>
}

impl SearchBody {
    pub fn term(self) -> Result<String, Invalid> {
        non_blank(self.search_term, "searchTerm")
    }
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct QuizBody {
    pub previous_questions: Option<Vec<i32>>,
    pub quiz_category: Option<QuizCategory>
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct QuizCategory {
    #[serde(deserialize_with = "lenient::int")]
    pub id: i32
}

impl QuizBody {
    pub fn into_round(self) -> Round {
        Round::new(
            self.previous_questions.unwrap_or_default(),
            self.quiz_category
                .map(|cat| CategoryFilter::from(cat.id))
                .unwrap_or(CategoryFilter::Any)
        )
    }
}

#[cfg(test)]
mod test {
    use {
        super::*,
        serde_json::{self, json}
    };

    fn question_body(value: serde_json::Value) -> QuestionBody {
        serde_json::from_value(value).expect("valid body")
    }

    #[test]
    fn accepts_string_ids() {
        let body = question_body(json!({
            "question": "Who painted the Mona Lisa?",
            "answer": "Leonardo da Vinci",
            "category": "2",
            "difficulty": 3
        }));

        assert_eq!(body.validate(), Ok(ValidQuestion {
            question: "Who painted the Mona Lisa?".into(),
            answer: "Leonardo da Vinci".into(),
            category: 2,
            difficulty: 3
        }));
    }

    #[test]
    fn keeps_text_as_sent() {
        let body = question_body(json!({
            "question": "  What is 2 + 2?\n",
            "answer": " 4 ",
            "category": 1,
            "difficulty": 1
        }));

        let valid = body.validate().expect("valid question");
        assert_eq!(valid.question, "  What is 2 + 2?\n");
        assert_eq!(valid.answer, " 4 ");

        let term = serde_json::from_value::<SearchBody>(json!({ "searchTerm": " Who " }))
            .expect("search body")
            .term();
        assert_eq!(term, Ok(" Who ".to_string()));
    }

    #[test]
    fn difficulty_message_names_the_range() {
        assert_eq!(
            Invalid::Difficulty(9).to_string(),
            "difficulty 9 is outside of 1..=5"
        );
    }

    #[test]
    fn rejects_non_numeric_ids() {
        let parsed = serde_json::from_value::<QuestionBody>(json!({ "category": "art" }));
        assert!(parsed.is_err());
    }

    #[test]
    fn reports_first_problem() {
        assert_eq!(question_body(json!({})).validate(), Err(Invalid::Missing("question")));
        assert_eq!(
            question_body(json!({ "question": "  ", "answer": "a" })).validate(),
            Err(Invalid::Blank("question"))
        );
        assert_eq!(
            question_body(json!({ "question": "q", "answer": "a", "difficulty": 1 })).validate(),
            Err(Invalid::Missing("category"))
        );
        assert_eq!(
            question_body(json!({ "question": "q", "answer": "a", "category": 1, "difficulty": 6 })).validate(),
            Err(Invalid::Difficulty(6))
        );
        assert_eq!(
            question_body(json!({ "question": "q", "answer": "a", "category": null, "difficulty": 2 })).validate(),
            Err(Invalid::Missing("category"))
        );
    }

    #[test]
    fn search_term_required() {
        assert_eq!(SearchBody::default().term(), Err(Invalid::Missing("searchTerm")));
        assert_eq!(
            serde_json::from_value::<SearchBody>(json!({ "searchTerm": " " })).map(SearchBody::term).ok(),
            Some(Err(Invalid::Blank("searchTerm")))
        );
    }

    #[test]
    fn quiz_defaults_to_any_category() {
        let round = serde_json::from_value::<QuizBody>(json!({}))
            .expect("empty body")
            .into_round();
        assert!(round.previous.is_empty());
        assert_eq!(round.filter, CategoryFilter::Any);

        let round = serde_json::from_value::<QuizBody>(json!({
            "previous_questions": [2, 5, 6],
            "quiz_category": { "type": "Science", "id": "1" }
        })).expect("frontend body").into_round();
        assert_eq!(round.previous, vec![2, 5, 6]);
        assert_eq!(round.filter, CategoryFilter::Only(1));

        let round = serde_json::from_value::<QuizBody>(json!({
            "previous_questions": null,
            "quiz_category": { "type": "click", "id": 0 }
        })).expect("all categories").into_round();
        assert_eq!(round.filter, CategoryFilter::Any);
    }
}
