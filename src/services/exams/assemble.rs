//! 模拟考试组卷
//!
//! 按科目从题库随机抽题，可选打乱题目顺序和选项顺序。
//! 随机数发生器由调用方传入，测试中使用固定种子。

use rand::Rng;
use rand::seq::SliceRandom;
use serde_json::Value;

use crate::models::exams::entities::ExamQuestion;
use crate::models::exams::requests::SimuladoSettings;
use crate::models::questions::entities::Question;

/// 题量不足的科目
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsufficientSubject {
    pub subject: String,
    pub available: usize,
}

fn matches_settings(question: &Question, subject: &str, settings: &SimuladoSettings) -> bool {
    question.is_active
        && question.subject == subject
        && settings
            .difficulty
            .as_deref()
            .is_none_or(|difficulty| question.difficulty == difficulty)
}

/// 打乱选项并重新定位正确答案
pub fn shuffle_options<R: Rng + ?Sized>(question: &mut ExamQuestion, rng: &mut R) {
    let len = question.options.len();
    if len < 2 {
        return;
    }

    let mut order: Vec<usize> = (0..len).collect();
    order.shuffle(rng);

    let original = std::mem::take(&mut question.options);
    question.options = order.iter().map(|&i| original[i].clone()).collect();

    if let Some(correct) = question.correct_index()
        && let Ok(correct) = usize::try_from(correct)
        && let Some(new_index) = order.iter().position(|&i| i == correct)
    {
        question.correct_answer = Some(Value::from(new_index));
    }
}

/// 组卷，任一科目题量不足时返回所有不足的科目
pub fn assemble_simulado<R: Rng + ?Sized>(
    bank: &[Question],
    settings: &SimuladoSettings,
    rng: &mut R,
) -> Result<Vec<ExamQuestion>, Vec<InsufficientSubject>> {
    let mut pools = Vec::with_capacity(settings.subjects.len());
    let mut insufficient = Vec::new();

    for subject in &settings.subjects {
        let pool: Vec<&Question> = bank
            .iter()
            .filter(|q| matches_settings(q, subject, settings))
            .collect();
        if pool.len() < settings.questions_per_subject {
            insufficient.push(InsufficientSubject {
                subject: subject.clone(),
                available: pool.len(),
            });
        }
        pools.push(pool);
    }

    if !insufficient.is_empty() {
        return Err(insufficient);
    }

    let mut selected: Vec<ExamQuestion> = Vec::new();
    for mut pool in pools {
        pool.shuffle(rng);
        selected.extend(
            pool.into_iter()
                .take(settings.questions_per_subject)
                .map(|q| ExamQuestion::from(q.clone())),
        );
    }

    if settings.shuffle_questions {
        selected.shuffle(rng);
    }

    if settings.shuffle_options {
        for question in &mut selected {
            shuffle_options(question, rng);
        }
    }

    Ok(selected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use serde_json::{Map, Value, json};
    use std::collections::HashMap;

    fn question(id: &str, subject: &str, difficulty: &str, correct: i64) -> Question {
        Question {
            id: id.into(),
            question: format!("Pergunta {id}"),
            subject: subject.into(),
            difficulty: difficulty.into(),
            kind: "Múltipla Escolha".into(),
            question_type: None,
            options: vec![json!("alfa"), json!("beta"), json!("gama"), json!("delta")],
            correct_answer: correct,
            tags: Vec::new(),
            explanation: String::new(),
            usage_count: 0,
            is_active: true,
            user_id: Some("u1".into()),
            created_at: None,
            updated_at: None,
            extra: Map::new(),
        }
    }

    fn bank() -> Vec<Question> {
        let mut bank = Vec::new();
        for i in 0..6 {
            bank.push(question(&format!("m{i}"), "Matemática", "Fácil", i % 4));
            bank.push(question(&format!("p{i}"), "Português", "Fácil", (i + 1) % 4));
        }
        bank.push(question("mh", "Matemática", "Difícil", 2));
        bank
    }

    fn settings(subjects: &[&str], per_subject: usize) -> SimuladoSettings {
        SimuladoSettings {
            title: "Simulado".into(),
            description: String::new(),
            grade: json!("9º ano"),
            subjects: subjects.iter().map(|s| s.to_string()).collect(),
            questions_per_subject: per_subject,
            difficulty: Some("Fácil".into()),
            time_limit: 120,
            shuffle_questions: true,
            shuffle_options: true,
            show_results: true,
            allow_review: true,
        }
    }

    #[test]
    fn test_exact_count_per_subject_without_mixing() {
        let bank = bank();
        let mut rng = StdRng::seed_from_u64(7);
        let selected =
            assemble_simulado(&bank, &settings(&["Matemática", "Português"], 4), &mut rng).unwrap();

        assert_eq!(selected.len(), 8);
        let mut per_subject: HashMap<String, usize> = HashMap::new();
        for q in &selected {
            *per_subject.entry(q.subject.clone().unwrap()).or_default() += 1;
            assert_eq!(q.extra["difficulty"], "Fácil");
        }
        assert_eq!(per_subject["Matemática"], 4);
        assert_eq!(per_subject["Português"], 4);
    }

    #[test]
    fn test_option_shuffle_keeps_correct_option() {
        let bank = bank();
        let by_id: HashMap<&str, &Question> = bank.iter().map(|q| (q.id.as_str(), q)).collect();

        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let selected =
                assemble_simulado(&bank, &settings(&["Matemática"], 6), &mut rng).unwrap();
            for q in selected {
                let original = by_id[q.id.as_deref().unwrap()];
                let correct_text = &original.options[original.correct_answer as usize];
                let new_index = q.correct_index().unwrap() as usize;
                assert_eq!(&q.options[new_index], correct_text);
            }
        }
    }

    #[test]
    fn test_insufficient_subjects_reported() {
        let bank = bank();
        let mut rng = StdRng::seed_from_u64(1);
        let err = assemble_simulado(&bank, &settings(&["Matemática", "História"], 7), &mut rng)
            .unwrap_err();
        assert_eq!(
            err,
            vec![
                InsufficientSubject {
                    subject: "Matemática".into(),
                    available: 6
                },
                InsufficientSubject {
                    subject: "História".into(),
                    available: 0
                },
            ]
        );
    }

    #[test]
    fn test_mixed_difficulty_and_inactive_questions() {
        let mut bank = bank();
        bank[0].is_active = false;
        let mut all = settings(&["Matemática"], 6);
        all.difficulty = None;
        all.shuffle_options = false;

        let mut rng = StdRng::seed_from_u64(3);
        let selected = assemble_simulado(&bank, &all, &mut rng).unwrap();
        assert!(selected.iter().all(|q| q.id.as_deref() != Some("m0")));
        assert!(selected.iter().all(|q| q.options.len() == 4));
    }

    #[test]
    fn test_shuffle_options_out_of_range_answer_untouched() {
        let mut q = ExamQuestion {
            options: vec![Value::from("x"), Value::from("y")],
            correct_answer: Some(json!(5)),
            ..Default::default()
        };
        shuffle_options(&mut q, &mut StdRng::seed_from_u64(9));
        assert_eq!(q.correct_index(), Some(5));
        assert_eq!(q.options.len(), 2);
    }
}
