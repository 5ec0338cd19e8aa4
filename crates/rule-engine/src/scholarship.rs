//! 内置奖学金规则表

use crate::facts::{CGPA, CO_CURRICULAR_SCORE, DISCIPLINARY_ACTIONS, FAMILY_INCOME};
use crate::models::{Action, Condition, Decision, Rule};
use crate::operators::Operator;

/// 奖学金资格规则，按定义顺序返回
pub fn scholarship_rules() -> Vec<Rule> {
    vec![
        Rule::new(
            "Top merit candidate",
            100,
            vec![
                Condition::new(CGPA, Operator::Gte, 3.7),
                Condition::new(CO_CURRICULAR_SCORE, Operator::Gte, 80),
                Condition::new(FAMILY_INCOME, Operator::Lte, 8000),
                Condition::new(DISCIPLINARY_ACTIONS, Operator::Eq, 0),
            ],
            Action::new(
                Decision::AwardFull,
                "Excellent academic & co-curricular performance, with acceptable need",
            ),
        ),
        Rule::new(
            "Good candidate - partial scholarship",
            80,
            vec![
                Condition::new(CGPA, Operator::Gte, 3.3),
                Condition::new(CO_CURRICULAR_SCORE, Operator::Gte, 60),
                Condition::new(FAMILY_INCOME, Operator::Lte, 12000),
                Condition::new(DISCIPLINARY_ACTIONS, Operator::Lte, 1),
            ],
            Action::new(
                Decision::AwardPartial,
                "Good academic & involvement record with moderate need",
            ),
        ),
        Rule::new(
            "Need-based review",
            70,
            vec![
                Condition::new(CGPA, Operator::Gte, 2.5),
                Condition::new(FAMILY_INCOME, Operator::Lte, 4000),
            ],
            Action::new(Decision::Review, "High need but borderline academic score"),
        ),
        Rule::new(
            "Low CGPA – not eligible",
            95,
            vec![Condition::new(CGPA, Operator::Lt, 2.5)],
            Action::new(
                Decision::Reject,
                "CGPA below minimum scholarship requirement",
            ),
        ),
        Rule::new(
            "Serious disciplinary record",
            90,
            vec![Condition::new(DISCIPLINARY_ACTIONS, Operator::Gte, 2)],
            Action::new(Decision::Reject, "Too many disciplinary records"),
        ),
    ]
}
