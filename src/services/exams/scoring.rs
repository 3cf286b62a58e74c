//! 评分
//!
//! 选择题按下标比较自动评分，主观题只记录答案并标记为待人工批改。

use serde_json::Value;

use crate::models::exams::entities::ExamQuestion;
use crate::models::submissions::entities::{GradingStatus, QuestionResult};

/// 未作答
pub const NO_ANSWER: i64 = -1;

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreOutcome {
    pub score: i64,
    pub total_multiple_choice: i64,
    pub total_essay: i64,
    pub percentage: i64,
    pub results: Vec<QuestionResult>,
    pub grading_status: GradingStatus,
}

/// 与 JS `Math.round` 一致：.5 向正无穷取整
pub fn js_round(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

pub fn score_exam(
    questions: &[ExamQuestion],
    answers: &[Value],
    essay_answers: &[Option<String>],
) -> ScoreOutcome {
    let mut score = 0;
    let mut total_multiple_choice = 0;
    let mut total_essay = 0;
    let mut results = Vec::with_capacity(questions.len());

    for (index, question) in questions.iter().enumerate() {
        if question.is_essay() {
            total_essay += 1;
            results.push(QuestionResult::Essay {
                question_id: question.id.clone(),
                question: question.question.clone(),
                essay_answer: essay_answers
                    .get(index)
                    .cloned()
                    .flatten()
                    .unwrap_or_default(),
                is_correct: None,
                requires_manual_grading: true,
            });
            continue;
        }

        total_multiple_choice += 1;
        let user_answer = answers
            .get(index)
            .filter(|answer| !answer.is_null())
            .cloned()
            .unwrap_or(Value::from(NO_ANSWER));
        // 两边都是同一个整数才算对，其余一律算错
        let is_correct = match (user_answer.as_i64(), question.correct_index()) {
            (Some(given), Some(correct)) => given != NO_ANSWER && given == correct,
            _ => false,
        };
        if is_correct {
            score += 1;
        }

        results.push(QuestionResult::MultipleChoice {
            question_id: question.id.clone(),
            question: question.question.clone(),
            user_answer,
            correct_answer: question.correct_answer.clone(),
            is_correct,
            explanation: question.explanation.clone().unwrap_or_default(),
        });
    }

    let percentage = if total_multiple_choice > 0 {
        js_round(score as f64 / total_multiple_choice as f64 * 100.0)
    } else {
        0
    };

    let grading_status = if results.iter().any(QuestionResult::requires_manual_grading) {
        GradingStatus::PendingReview
    } else {
        GradingStatus::Graded
    };

    ScoreOutcome {
        score,
        total_multiple_choice,
        total_essay,
        percentage,
        results,
        grading_status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn choice(correct: i64) -> ExamQuestion {
        ExamQuestion {
            question: Some(format!("Questão com resposta {correct}")),
            options: vec!["A".into(), "B".into(), "C".into(), "D".into()],
            correct_answer: Some(json!(correct)),
            ..Default::default()
        }
    }

    fn essay() -> ExamQuestion {
        ExamQuestion {
            question: Some("Disserte sobre o ciclo da água".into()),
            question_type: Some("essay".into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_half_correct() {
        let outcome = score_exam(&[choice(1), choice(2)], &[json!(1), json!(0)], &[]);
        assert_eq!(outcome.score, 1);
        assert_eq!(outcome.total_multiple_choice, 2);
        assert_eq!(outcome.percentage, 50);
        assert_eq!(outcome.grading_status, GradingStatus::Graded);
    }

    #[test]
    fn test_missing_answers_are_wrong() {
        let outcome = score_exam(&[choice(0), choice(3), choice(2)], &[json!(0), Value::Null], &[]);
        assert_eq!(outcome.score, 1);
        // 1/3 = 33.33 -> 33
        assert_eq!(outcome.percentage, 33);
        match &outcome.results[2] {
            QuestionResult::MultipleChoice {
                user_answer,
                is_correct,
                ..
            } => {
                assert_eq!(*user_answer, json!(NO_ANSWER));
                assert!(!is_correct);
            }
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn test_rounding_matches_js() {
        // 2/3 = 66.67 -> 67
        let outcome = score_exam(
            &[choice(0), choice(0), choice(0)],
            &[json!(0), json!(0), json!(1)],
            &[],
        );
        assert_eq!(outcome.percentage, 67);
        assert_eq!(js_round(12.5), 13);
    }

    #[test]
    fn test_essay_requires_review() {
        let outcome = score_exam(
            &[choice(2), essay()],
            &[json!(2)],
            &[None, Some("A água evapora...".into())],
        );
        assert_eq!(outcome.score, 1);
        assert_eq!(outcome.total_multiple_choice, 1);
        assert_eq!(outcome.total_essay, 1);
        assert_eq!(outcome.percentage, 100);
        assert_eq!(outcome.grading_status, GradingStatus::PendingReview);
        assert!(matches!(
            &outcome.results[1],
            QuestionResult::Essay { essay_answer, is_correct: None, .. } if essay_answer == "A água evapora..."
        ));
    }

    #[test]
    fn test_only_essays_scores_zero() {
        let outcome = score_exam(&[essay()], &[], &[]);
        assert_eq!(outcome.percentage, 0);
        assert_eq!(outcome.grading_status, GradingStatus::PendingReview);
    }

    #[test]
    fn test_non_integer_values_are_wrong() {
        let mut text_key = choice(0);
        text_key.correct_answer = Some(json!("1"));
        let outcome = score_exam(
            &[choice(1), choice(2), text_key, choice(3)],
            &[json!("1"), json!(2.5), json!(1), json!(3)],
            &[],
        );
        assert_eq!(outcome.score, 1);
        assert_eq!(outcome.percentage, 25);
        match &outcome.results[0] {
            QuestionResult::MultipleChoice {
                user_answer,
                is_correct,
                ..
            } => {
                assert_eq!(*user_answer, json!("1"));
                assert!(!is_correct);
            }
            other => panic!("unexpected result {other:?}"),
        }
    }
}
