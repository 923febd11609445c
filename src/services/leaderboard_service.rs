use crate::models::domain::Student;
use crate::models::dto::LeaderboardEntry;

pub struct LeaderboardService;

impl LeaderboardService {
    /// Rank students by score, ties broken by accuracy. Students who have
    /// not answered anything sort last among their score group.
    pub fn rank(students: &[Student]) -> Vec<LeaderboardEntry> {
        let mut sorted: Vec<&Student> = students.iter().collect();
        sorted.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then_with(|| b.accuracy().total_cmp(&a.accuracy()))
        });

        sorted
            .iter()
            .enumerate()
            .map(|(index, student)| LeaderboardEntry::from_ranked(index + 1, student))
            .collect()
    }
}
