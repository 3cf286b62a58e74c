use serde::Deserialize;
use serde_json::Value;

/// 任意难度
pub const MIXED_DIFFICULTY: &str = "Misto";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSimuladoRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub grade: Option<Value>,
    #[serde(default)]
    pub subjects: Vec<String>,
    pub questions_per_subject: Option<i64>,
    pub difficulty: Option<String>,
    pub time_limit: Option<i64>,
    pub shuffle_questions: Option<bool>,
    pub shuffle_options: Option<bool>,
    pub show_results: Option<bool>,
    pub allow_review: Option<bool>,
}

/// 校验后的组卷参数
#[derive(Debug, Clone, PartialEq)]
pub struct SimuladoSettings {
    pub title: String,
    pub description: String,
    pub grade: Value,
    pub subjects: Vec<String>,
    pub questions_per_subject: usize,
    // None 表示不限难度
    pub difficulty: Option<String>,
    pub time_limit: i64,
    pub shuffle_questions: bool,
    pub shuffle_options: bool,
    pub show_results: bool,
    pub allow_review: bool,
}

impl CreateSimuladoRequest {
    pub fn into_settings(self) -> Result<SimuladoSettings, &'static str> {
        let title = self.title.unwrap_or_default().trim().to_string();
        if title.is_empty() {
            return Err("Simulado title is required");
        }

        let grade = match self.grade {
            Some(Value::Null) | None => return Err("Simulado grade is required"),
            Some(Value::String(s)) if s.trim().is_empty() => {
                return Err("Simulado grade is required");
            }
            Some(grade) => grade,
        };

        let subjects: Vec<String> = self
            .subjects
            .into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        if subjects.is_empty() {
            return Err("Select at least one subject");
        }

        let questions_per_subject = self.questions_per_subject.unwrap_or(10);
        if questions_per_subject < 1 {
            return Err("questionsPerSubject must be at least 1");
        }

        let difficulty = self
            .difficulty
            .filter(|d| !d.is_empty() && d != MIXED_DIFFICULTY);

        Ok(SimuladoSettings {
            title,
            description: self.description.unwrap_or_default(),
            grade,
            subjects,
            questions_per_subject: questions_per_subject as usize,
            difficulty,
            time_limit: self.time_limit.unwrap_or(120),
            shuffle_questions: self.shuffle_questions.unwrap_or(true),
            shuffle_options: self.shuffle_options.unwrap_or(true),
            show_results: self.show_results.unwrap_or(true),
            allow_review: self.allow_review.unwrap_or(true),
        })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitExamRequest {
    // 不限定类型，非整数的答案按答错处理
    #[serde(default)]
    pub answers: Vec<Value>,
    #[serde(default)]
    pub essay_answers: Vec<Option<String>>,
    pub student_name: Option<String>,
    pub time_spent: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct PublicExamQuery {
    pub session: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(value: Value) -> CreateSimuladoRequest {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_settings_defaults() {
        let settings = request(json!({
            "title": "Simulado 1º bimestre",
            "grade": "9º ano",
            "subjects": ["Matemática", "Português"],
            "difficulty": "Misto"
        }))
        .into_settings()
        .unwrap();

        assert_eq!(settings.questions_per_subject, 10);
        assert_eq!(settings.time_limit, 120);
        assert!(settings.difficulty.is_none());
        assert!(settings.shuffle_questions && settings.shuffle_options);
    }

    #[test]
    fn test_settings_rejects_missing_fields() {
        assert!(
            request(json!({"grade": "9", "subjects": ["História"]}))
                .into_settings()
                .is_err()
        );
        assert!(
            request(json!({"title": "T", "subjects": ["História"]}))
                .into_settings()
                .is_err()
        );
        assert!(
            request(json!({"title": "T", "grade": 9, "subjects": []}))
                .into_settings()
                .is_err()
        );
        assert!(
            request(json!({"title": "T", "grade": 9, "subjects": ["Arte"], "questionsPerSubject": 0}))
                .into_settings()
                .is_err()
        );
    }
}
