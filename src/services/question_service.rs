use crate::config::QuizConfig;
use crate::errors::{QuizError, QuizResult};
use crate::models::domain::{
    operand_ranges, CustomQuestion, Difficulty, Operation, Question, QuestionHistory,
};
use crate::random::{RandomSource, ThreadRandomSource};

/// Generated questions always carry the correct answer plus three wrong ones.
const DISTRACTOR_COUNT: usize = 3;

/// Chance that a hard division question carries a remainder.
const REMAINDER_PROBABILITY: f64 = 0.3;

/// Produces questions for a (operation, difficulty) pair: fresh ones from
/// the operand range table, or teacher-authored ones picked from a pool.
/// Owns the randomness source so every draw stays mockable.
pub struct QuestionService {
    random: Box<dyn RandomSource>,
    config: QuizConfig,
}

impl QuestionService {
    pub fn new(config: QuizConfig) -> Self {
        Self::with_random(Box::new(ThreadRandomSource), config)
    }

    pub fn with_random(random: Box<dyn RandomSource>, config: QuizConfig) -> Self {
        Self { random, config }
    }

    /// Build one valid question for the pair. Fails with
    /// `ExhaustedOptionSpace` when the answer is so small that three distinct
    /// positive wrong options do not exist within the offset range.
    pub fn generate(
        &mut self,
        operation: Operation,
        difficulty: Difficulty,
    ) -> QuizResult<Question> {
        let ranges = operand_ranges(operation, difficulty);

        let (text, answer) = match operation {
            Operation::Addition => {
                let num1 = self.random.int_between(ranges.min1, ranges.max1);
                let num2 = self.random.int_between(ranges.min2, ranges.max2);
                (format!("{num1} + {num2} = ?"), num1 + num2)
            }
            Operation::Subtraction => {
                // Cap the subtrahend at the minuend so the result is never
                // negative.
                let num1 = self.random.int_between(ranges.min1, ranges.max1);
                let num2 = self
                    .random
                    .int_between(ranges.min2, ranges.max2.min(num1));
                (format!("{num1} - {num2} = ?"), num1 - num2)
            }
            Operation::Multiplication => {
                let num1 = self.random.int_between(ranges.min1, ranges.max1);
                let num2 = self.random.int_between(ranges.min2, ranges.max2);
                (format!("{num1} × {num2} = ?"), num1 * num2)
            }
            Operation::Division => {
                // Built from divisor × quotient so the dividend divides
                // cleanly; hard questions sometimes add a remainder, and the
                // recorded answer stays the floor quotient.
                let num2 = self.random.int_between(ranges.min2, ranges.max2);
                let with_remainder = difficulty == Difficulty::Hard
                    && self.random.chance(REMAINDER_PROBABILITY);
                let answer = self.random.int_between(ranges.min1, ranges.max1);
                let num1 = if with_remainder {
                    num2 * answer + self.random.int_between(1, num2 - 1)
                } else {
                    num2 * answer
                };
                (format!("{num1} ÷ {num2} = ?"), answer)
            }
        };

        let options = self.build_options(answer, operation, difficulty)?;
        Ok(Question::new(text, options, answer, operation, difficulty))
    }

    /// Generator-mode repeat avoidance: retry while the candidate's text is
    /// anywhere in the history and the window is not yet full. Bounded; a
    /// repeat is accepted once the ceiling is reached.
    pub fn next_generated(
        &mut self,
        operation: Operation,
        difficulty: Difficulty,
        history: &mut QuestionHistory,
    ) -> QuizResult<Question> {
        let mut attempts = 0;
        let question = loop {
            attempts += 1;
            let candidate = self.generate(operation, difficulty)?;

            if !history.contains_text(&candidate.text) || history.is_full() {
                break candidate;
            }
            if attempts >= self.config.regenerate_attempt_limit {
                log::warn!(
                    "accepting repeated question '{}' after {} attempts",
                    candidate.text,
                    attempts
                );
                break candidate;
            }
        };

        history.record(&question);
        Ok(question)
    }

    /// Pool mode: pick among the teacher-authored questions matching the
    /// pair, avoiding those served within the recent-repeat window. A
    /// single-question pool is always accepted as-is.
    pub fn next_from_pool(
        &mut self,
        pool: &[CustomQuestion],
        operation: Operation,
        difficulty: Difficulty,
        history: &mut QuestionHistory,
    ) -> QuizResult<Question> {
        let matching: Vec<&CustomQuestion> = pool
            .iter()
            .filter(|q| q.matches(operation, difficulty))
            .collect();

        if matching.is_empty() {
            return Err(QuizError::EmptyPool(format!(
                "no custom questions for {operation}/{difficulty}"
            )));
        }

        let mut attempts = 0;
        let picked = loop {
            attempts += 1;
            let candidate = matching[self.random.pick_index(matching.len())];

            let recently_served = history
                .seen_recently(&candidate.id, self.config.recent_repeat_window);
            if !recently_served
                || matching.len() == 1
                || attempts >= self.config.regenerate_attempt_limit
            {
                break candidate;
            }
        };

        let mut question = picked.to_question();
        self.shuffle(&mut question.options);
        history.record(&question);
        Ok(question)
    }

    /// Default strategy: teacher content when it exists for the pair,
    /// generated questions otherwise.
    pub fn next_question(
        &mut self,
        pool: &[CustomQuestion],
        operation: Operation,
        difficulty: Difficulty,
        history: &mut QuestionHistory,
    ) -> QuizResult<Question> {
        match self.next_from_pool(pool, operation, difficulty, history) {
            Err(QuizError::EmptyPool(_)) => {
                log::debug!(
                    "no custom questions for {operation}/{difficulty}, generating one"
                );
                self.next_generated(operation, difficulty, history)
            }
            other => other,
        }
    }

    fn build_options(
        &mut self,
        answer: i32,
        operation: Operation,
        difficulty: Difficulty,
    ) -> QuizResult<Vec<i32>> {
        let mut options = Vec::with_capacity(DISTRACTOR_COUNT + 1);
        options.push(answer);
        options.extend(self.build_distractors(answer, operation, difficulty)?);
        self.shuffle(&mut options);
        Ok(options)
    }

    /// Three distinct positive integers close to the answer. The offset range
    /// widens with difficulty; for multiplication and division it scales with
    /// the answer instead, so the wrong options stay plausible.
    fn build_distractors(
        &mut self,
        answer: i32,
        operation: Operation,
        difficulty: Difficulty,
    ) -> QuizResult<Vec<i32>> {
        let offset_range = match operation {
            Operation::Multiplication | Operation::Division => (answer * 3 / 10).max(2),
            _ => match difficulty {
                Difficulty::Easy => 3,
                Difficulty::Medium => 5,
                Difficulty::Hard => 8,
            },
        };

        let mut distractors = Vec::with_capacity(DISTRACTOR_COUNT);
        let mut attempts = 0;
        while distractors.len() < DISTRACTOR_COUNT {
            attempts += 1;
            if attempts > self.config.distractor_attempt_limit {
                return Err(QuizError::ExhaustedOptionSpace(format!(
                    "no {DISTRACTOR_COUNT} distinct wrong options for answer {answer} \
                     within {} attempts",
                    self.config.distractor_attempt_limit
                )));
            }

            let candidate = if distractors.is_empty()
                && operation == Operation::Multiplication
            {
                // Common slip for products: off by one small factor.
                answer + self.random.int_between(1, 5)
            } else {
                let offset = self.random.int_between(1, offset_range);
                let signed = if self.random.chance(0.5) {
                    answer + offset
                } else {
                    answer - offset
                };
                if signed <= 0 {
                    answer + offset
                } else {
                    signed
                }
            };

            if candidate != answer && !distractors.contains(&candidate) {
                distractors.push(candidate);
            }
        }

        Ok(distractors)
    }

    /// Fisher–Yates, driven through the randomness seam.
    fn shuffle(&mut self, values: &mut [i32]) {
        for i in (1..values.len()).rev() {
            let j = self.random.pick_index(i + 1);
            values.swap(i, j);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::MockRandomSource;
    use mockall::predicate::eq;
    use mockall::Sequence;

    fn service() -> QuestionService {
        QuestionService::new(QuizConfig::test_config())
    }

    /// Pull `num1` and `num2` back out of the display text.
    fn parse_operands(text: &str) -> (i32, i32) {
        let parts: Vec<&str> = text.split_whitespace().collect();
        (
            parts[0].parse().expect("first operand"),
            parts[2].parse().expect("second operand"),
        )
    }

    #[test]
    fn addition_easy_stays_in_range() {
        let mut service = service();

        for _ in 0..200 {
            let q = service
                .generate(Operation::Addition, Difficulty::Easy)
                .expect("addition never exhausts");
            let (num1, num2) = parse_operands(&q.text);

            assert!((1..=10).contains(&num1));
            assert!((1..=10).contains(&num2));
            assert_eq!(q.answer, num1 + num2);
        }
    }

    #[test]
    fn subtraction_is_never_negative() {
        let mut service = service();

        for difficulty in Difficulty::ALL {
            for _ in 0..100 {
                let q = service
                    .generate(Operation::Subtraction, difficulty)
                    .expect("subtraction never exhausts");
                let (num1, num2) = parse_operands(&q.text);

                assert!(num1 - num2 >= 0);
                assert_eq!(q.answer, num1 - num2);
            }
        }
    }

    #[test]
    fn easy_division_is_always_clean() {
        let mut service = service();
        let mut generated = 0;

        for _ in 0..200 {
            match service.generate(Operation::Division, Difficulty::Easy) {
                Ok(q) => {
                    let (num1, num2) = parse_operands(&q.text);
                    assert_eq!(num1 % num2, 0);
                    assert_eq!(q.answer, num1 / num2);
                    generated += 1;
                }
                // A quotient of 1 leaves only {2, 3} as wrong options, which
                // cannot fill three slots.
                Err(QuizError::ExhaustedOptionSpace(_)) => {}
                Err(other) => panic!("unexpected error: {other}"),
            }
        }

        assert!(generated > 0);
    }

    #[test]
    fn options_are_distinct_positive_and_contain_the_answer() {
        let mut service = service();

        for operation in Operation::ALL {
            for difficulty in Difficulty::ALL {
                for _ in 0..50 {
                    let q = match service.generate(operation, difficulty) {
                        Ok(q) => q,
                        Err(QuizError::ExhaustedOptionSpace(_))
                            if matches!(
                                operation,
                                Operation::Multiplication | Operation::Division
                            ) =>
                        {
                            continue
                        }
                        Err(other) => panic!("unexpected error: {other}"),
                    };

                    assert_eq!(q.options.len(), 4);
                    assert!(q.options.contains(&q.answer));
                    // Zero is reachable only as a subtraction answer; every
                    // wrong option must be strictly positive.
                    assert!(q.answer >= 0);
                    for option in &q.options {
                        assert!(
                            *option > 0 || *option == q.answer,
                            "non-positive option in {:?}",
                            q.options
                        );
                    }
                    let mut deduped = q.options.clone();
                    deduped.sort_unstable();
                    deduped.dedup();
                    assert_eq!(deduped.len(), 4, "duplicate option in {:?}", q.options);
                }
            }
        }
    }

    #[test]
    fn hard_division_remainder_branch_floors_the_quotient() {
        let mut seq = Sequence::new();
        let mut random = MockRandomSource::new();

        // divisor 7, remainder branch taken, quotient 5, remainder 3
        random
            .expect_int_between()
            .with(eq(2), eq(10))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(7);
        random
            .expect_chance()
            .with(eq(REMAINDER_PROBABILITY))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(true);
        random
            .expect_int_between()
            .with(eq(5), eq(12))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(5);
        random
            .expect_int_between()
            .with(eq(1), eq(6))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(3);

        // distractors: offset range max(2, 5*3/10) = 2
        for (offset, upward) in [(1, true), (2, true), (1, false)] {
            random
                .expect_int_between()
                .with(eq(1), eq(2))
                .times(1)
                .in_sequence(&mut seq)
                .return_const(offset);
            random
                .expect_chance()
                .with(eq(0.5))
                .times(1)
                .in_sequence(&mut seq)
                .return_const(upward);
        }

        // identity shuffle
        random
            .expect_pick_index()
            .times(3)
            .in_sequence(&mut seq)
            .returning(|len| len - 1);

        let mut service =
            QuestionService::with_random(Box::new(random), QuizConfig::test_config());
        let q = service
            .generate(Operation::Division, Difficulty::Hard)
            .expect("generation succeeds");

        assert_eq!(q.text, "38 ÷ 7 = ?");
        assert_eq!(q.answer, 5);
        assert_eq!(q.options, vec![5, 6, 7, 4]);
    }

    #[test]
    fn quotient_of_one_exhausts_the_option_space() {
        let mut random = MockRandomSource::new();

        // divisor 1, quotient 1: wrong options can only ever be 2 or 3
        random
            .expect_int_between()
            .with(eq(1), eq(5))
            .times(2)
            .return_const(1);
        random
            .expect_int_between()
            .with(eq(1), eq(2))
            .returning(|_, _| 1);
        random.expect_chance().with(eq(0.5)).return_const(true);

        let mut service =
            QuestionService::with_random(Box::new(random), QuizConfig::test_config());
        let result = service.generate(Operation::Division, Difficulty::Easy);

        assert!(matches!(result, Err(QuizError::ExhaustedOptionSpace(_))));
    }

    #[test]
    fn multiplication_biases_the_first_wrong_option() {
        let mut seq = Sequence::new();
        let mut random = MockRandomSource::new();

        random
            .expect_int_between()
            .with(eq(1), eq(5))
            .times(2)
            .in_sequence(&mut seq)
            .return_const(2); // 2 × 2 = 4

        // first wrong option: answer + factor
        random
            .expect_int_between()
            .with(eq(1), eq(5))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(4); // -> 8

        // remaining two from the ±range loop, range max(2, 4*3/10) = 2
        for (offset, upward) in [(1, true), (2, false)] {
            random
                .expect_int_between()
                .with(eq(1), eq(2))
                .times(1)
                .in_sequence(&mut seq)
                .return_const(offset);
            random
                .expect_chance()
                .with(eq(0.5))
                .times(1)
                .in_sequence(&mut seq)
                .return_const(upward);
        }

        random
            .expect_pick_index()
            .times(3)
            .in_sequence(&mut seq)
            .returning(|len| len - 1);

        let mut service =
            QuestionService::with_random(Box::new(random), QuizConfig::test_config());
        let q = service
            .generate(Operation::Multiplication, Difficulty::Easy)
            .expect("generation succeeds");

        assert_eq!(q.text, "2 × 2 = ?");
        // [answer, biased first wrong, 4+1, 4-2]
        assert_eq!(q.options, vec![4, 8, 5, 2]);
    }

    #[test]
    fn collision_retries_stop_at_the_ceiling() {
        let mut random = MockRandomSource::new();

        // operands pinned: every candidate is "2 + 2 = ?"
        random
            .expect_int_between()
            .with(eq(1), eq(10))
            .returning(|_, _| 2);
        // distractor offsets cycle 1, 2, 3 so each generation succeeds
        let mut draw = 0;
        random
            .expect_int_between()
            .with(eq(1), eq(3))
            .returning(move |_, _| {
                draw += 1;
                (draw - 1) % 3 + 1
            });
        random.expect_chance().with(eq(0.5)).return_const(true);
        random.expect_pick_index().returning(|len| len - 1);

        let config = QuizConfig::test_config();
        let mut service = QuestionService::with_random(Box::new(random), config);

        let mut history = QuestionHistory::new(config.history_limit);
        let seeded = service
            .generate(Operation::Addition, Difficulty::Easy)
            .expect("seed question");
        assert_eq!(seeded.text, "2 + 2 = ?");
        history.record(&seeded);

        // Every candidate collides and the window is not full, so the loop
        // must give up at the ceiling and accept the repeat.
        let question = service
            .next_generated(Operation::Addition, Difficulty::Easy, &mut history)
            .expect("bounded retry terminates");

        assert_eq!(question.text, "2 + 2 = ?");
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn full_history_accepts_repeats_immediately() {
        let config = QuizConfig {
            history_limit: 1,
            ..QuizConfig::test_config()
        };
        let mut service = QuestionService::new(config);
        let mut history = QuestionHistory::new(config.history_limit);

        service
            .next_generated(Operation::Addition, Difficulty::Easy, &mut history)
            .expect("first question");
        assert!(history.is_full());

        // With a full window the repeat check is skipped entirely.
        for _ in 0..10 {
            service
                .next_generated(Operation::Addition, Difficulty::Easy, &mut history)
                .expect("repeats allowed once the window is full");
        }
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn pool_mode_fails_on_empty_pool() {
        let mut service = service();
        let mut history = QuestionHistory::new(20);

        let pool = vec![CustomQuestion::new(
            "What is 6 + 4?",
            10,
            vec![8, 9, 12],
            Operation::Addition,
            Difficulty::Easy,
        )];

        let result =
            service.next_from_pool(&pool, Operation::Division, Difficulty::Hard, &mut history);
        assert!(matches!(result, Err(QuizError::EmptyPool(_))));
        assert!(history.is_empty());
    }

    #[test]
    fn pool_mode_avoids_recently_served_questions() {
        let first = CustomQuestion::new(
            "What is 6 + 4?",
            10,
            vec![8, 9, 12],
            Operation::Addition,
            Difficulty::Easy,
        );
        let second = CustomQuestion::new(
            "What is 7 + 1?",
            8,
            vec![6, 9, 7],
            Operation::Addition,
            Difficulty::Easy,
        );

        let mut seq = Sequence::new();
        let mut random = MockRandomSource::new();
        // first pick lands on the recently served question, retry picks the
        // other one
        random
            .expect_pick_index()
            .with(eq(2usize))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(0usize);
        random
            .expect_pick_index()
            .with(eq(2usize))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(1usize);
        // identity shuffle of the four options
        random
            .expect_pick_index()
            .times(3)
            .in_sequence(&mut seq)
            .returning(|len| len - 1);

        let mut service =
            QuestionService::with_random(Box::new(random), QuizConfig::test_config());

        let mut history = QuestionHistory::new(20);
        history.record(&first.to_question());

        let pool = vec![first, second.clone()];
        let question = service
            .next_from_pool(&pool, Operation::Addition, Difficulty::Easy, &mut history)
            .expect("pool pick succeeds");

        assert_eq!(question.id, second.id);
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn single_question_pool_serves_repeats() {
        let only = CustomQuestion::new(
            "What is 6 + 4?",
            10,
            vec![8, 9],
            Operation::Addition,
            Difficulty::Easy,
        );

        let mut random = MockRandomSource::new();
        random.expect_pick_index().returning(|len| len - 1);

        let mut service =
            QuestionService::with_random(Box::new(random), QuizConfig::test_config());

        let mut history = QuestionHistory::new(20);
        history.record(&only.to_question());

        let pool = vec![only.clone()];
        let question = service
            .next_from_pool(&pool, Operation::Addition, Difficulty::Easy, &mut history)
            .expect("single-question pool always serves");

        assert_eq!(question.id, only.id);
        assert_eq!(question.options.len(), 3);
        assert!(question.options.contains(&10));
    }

    #[test]
    fn next_question_falls_back_to_generation() {
        let mut service = service();
        let mut history = QuestionHistory::new(20);

        let question = service
            .next_question(&[], Operation::Addition, Difficulty::Easy, &mut history)
            .expect("falls back to the generator");

        assert_eq!(question.operation, Operation::Addition);
        assert_eq!(question.options.len(), 4);
        assert_eq!(history.len(), 1);
    }
}
