use super::domain::{Dimension, ItemKind, ATTITUDE_ITEMS, TOTAL_ITEMS};
use serde::Serialize;

/// Instructional interstitials shown before each answer block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InstructionPage {
    AttitudeBlock,
    SelfRatingBlock,
}

impl InstructionPage {
    pub const fn heading(self) -> &'static str {
        match self {
            Self::AttitudeBlock => "Statements 1 to 60",
            Self::SelfRatingBlock => "Statements 61 to 66",
        }
    }

    pub const fn body(self) -> &'static str {
        match self {
            Self::AttitudeBlock => {
                "Read each statement carefully and mark a single value for how much you agree: \
                 1 = strongly disagree, 2 = disagree, 3 = neither, 4 = agree, 5 = strongly agree. \
                 Answer honestly; there are no right or wrong answers."
            }
            Self::SelfRatingBlock => {
                "For each ability, pick one value from 1 (very low) to 6 (very high) for how you \
                 see yourself. Do not repeat a number across these six statements; each value may \
                 be used only once."
            }
        }
    }
}

/// One logical step of the assessment walk. Item steps carry their index and
/// value range so navigation never falls back to offset arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Step {
    ProfileEntry,
    Instructions { page: InstructionPage },
    Item { index: usize, item_kind: ItemKind },
    Results,
}

/// Static description of the questionnaire: the ordered step sequence plus
/// the question catalog the steps refer to.
#[derive(Debug)]
pub struct AssessmentBlueprint {
    steps: Vec<Step>,
}

impl AssessmentBlueprint {
    pub fn standard() -> Self {
        let mut steps = Vec::with_capacity(TOTAL_ITEMS + 4);
        steps.push(Step::ProfileEntry);
        steps.push(Step::Instructions {
            page: InstructionPage::AttitudeBlock,
        });
        for index in 0..ATTITUDE_ITEMS {
            steps.push(Step::Item {
                index,
                item_kind: ItemKind::Attitude,
            });
        }
        steps.push(Step::Instructions {
            page: InstructionPage::SelfRatingBlock,
        });
        for index in ATTITUDE_ITEMS..TOTAL_ITEMS {
            steps.push(Step::Item {
                index,
                item_kind: ItemKind::SelfRating,
            });
        }
        steps.push(Step::Results);

        Self { steps }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Position of the results step (the terminal step).
    pub fn results_position(&self) -> usize {
        self.steps.len() - 1
    }

    /// Position of the step presenting the given item.
    pub fn position_of_item(&self, index: usize) -> Option<usize> {
        self.steps
            .iter()
            .position(|step| matches!(step, Step::Item { index: i, .. } if *i == index))
    }

    /// Question text for any of the 66 items.
    pub fn question(&self, index: usize) -> Option<&'static str> {
        if index < ATTITUDE_ITEMS {
            ATTITUDE_STATEMENTS.get(index).copied()
        } else {
            SELF_RATING_STATEMENTS.get(index - ATTITUDE_ITEMS).copied()
        }
    }

    /// The ten attitude statements belonging to one dimension.
    pub fn statements_for(&self, dimension: Dimension) -> &'static [&'static str] {
        let range = dimension.attitude_range();
        &ATTITUDE_STATEMENTS[range]
    }
}

// Ten statements per dimension, in dimension order (R, I, A, S, E, C).
static ATTITUDE_STATEMENTS: [&str; ATTITUDE_ITEMS] = [
    // Realistic
    "I enjoy repairing mechanical things such as bicycles or appliances.",
    "I would rather work outdoors than at a desk.",
    "I like using tools and machines to build or fix things.",
    "Physical, hands-on work suits me better than paperwork.",
    "I am good at assembling furniture or equipment from instructions.",
    "I enjoy taking care of plants or animals.",
    "I would enjoy operating heavy machinery or vehicles.",
    "I prefer practical tasks with a visible, concrete result.",
    "I like finding out how devices work by taking them apart.",
    "I feel comfortable doing physically demanding activities.",
    // Investigative
    "I enjoy solving math or logic puzzles.",
    "I like to understand the scientific explanation behind everyday events.",
    "I would enjoy carrying out experiments in a laboratory.",
    "I read about scientific discoveries in my free time.",
    "I prefer analyzing a problem thoroughly before acting.",
    "I enjoy working with data, charts, and statistics.",
    "I ask a lot of questions about how and why things happen.",
    "Abstract, complex problems attract me rather than scare me.",
    "I like researching a topic until I understand it completely.",
    "I would enjoy a career in science or technology research.",
    // Artistic
    "I enjoy drawing, painting, or other visual arts.",
    "I like writing stories, poems, or song lyrics.",
    "Playing or listening to music is an important part of my life.",
    "I prefer open-ended tasks where I can be creative.",
    "I enjoy acting, dancing, or performing in front of others.",
    "I notice design, color, and style in the things around me.",
    "I like to express my ideas in original, unconventional ways.",
    "Routine and repetitive tasks bore me quickly.",
    "I enjoy taking photographs or making videos.",
    "I would enjoy working in a creative field even if it paid less.",
    // Social
    "I enjoy helping classmates understand difficult material.",
    "People often come to me with their personal problems.",
    "I like volunteering for causes that help other people.",
    "I work better in a group than alone.",
    "I find it easy to understand how other people feel.",
    "I would enjoy teaching or training others.",
    "I like taking care of children, elderly people, or people in need.",
    "Listening to others is something I do well and enjoy.",
    "I prefer cooperating with others over competing against them.",
    "I would enjoy a job focused on improving people's wellbeing.",
    // Enterprising
    "I enjoy convincing others to see things my way.",
    "I like taking the lead when a group has to get something done.",
    "I would enjoy starting and running my own business.",
    "Selling a product or an idea sounds exciting to me.",
    "I am comfortable speaking in front of an audience.",
    "I like setting ambitious goals and competing to reach them.",
    "I enjoy negotiating to get a better deal.",
    "Making decisions under pressure energizes me.",
    "I like organizing events and getting people involved.",
    "I would enjoy a career in management or politics.",
    // Conventional
    "I like keeping my notes, files, and belongings well organized.",
    "I enjoy working with numbers and keeping accurate records.",
    "I prefer tasks with clear rules and well-defined procedures.",
    "I am careful and precise with details others overlook.",
    "I enjoy making lists, schedules, and plans.",
    "I like checking documents for errors and inconsistencies.",
    "I feel comfortable following established routines.",
    "I would enjoy managing budgets or bookkeeping.",
    "I like filling in forms carefully and completely.",
    "I prefer finishing one task completely before starting another.",
];

// One self-rating aspect per dimension, same order. Answered 1-6, no repeats.
static SELF_RATING_STATEMENTS: [&str; TOTAL_ITEMS - ATTITUDE_ITEMS] = [
    "My manual and mechanical ability.",
    "My scientific and analytical ability.",
    "My artistic and creative ability.",
    "My ability to help, teach, and care for others.",
    "My leadership and persuasion ability.",
    "My order, accuracy, and organizational ability.",
];
