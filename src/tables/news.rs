//! News pool and the news roll

use crate::core::rng::RandomSource;
use crate::core::types::round1;
use crate::model::opinion::{OpinionShift, PublicOpinion};
use crate::timeline::{Category, Delta, Impact, Timeline, TimelineEvent};

/// A news headline and its effect on public opinion
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewsItem {
    pub title: &'static str,
    pub description: &'static str,
    pub effect: OpinionShift,
}

pub static NEWS_POOL: [NewsItem; 4] = [
    NewsItem {
        title: "Economic indicators improve",
        description: "Markets are in a slightly better mood.",
        effect: OpinionShift::new(0.5, 0.5, -0.5),
    },
    NewsItem {
        title: "Worries over rising prices",
        description: "A gap opens between daily life and how the government is rated.",
        effect: OpinionShift::new(-0.5, 0.5, 0.5),
    },
    NewsItem {
        title: "Swift disaster response",
        description: "Trust in the government ticks up a little.",
        effect: OpinionShift::new(0.8, 0.3, -0.6),
    },
    NewsItem {
        title: "Diplomatic talks stall",
        description: "Uncertainty about international relations.",
        effect: OpinionShift::new(-0.6, -0.6, 0.6),
    },
];

/// Roll for a news item.
///
/// When the draw exceeds `probability` nothing happens. Otherwise one pool
/// entry is picked uniformly, its effect applied to `opinion`, and a
/// neutral `news` entry dated `date` is prepended to `timeline`.
pub fn roll_news(
    opinion: &mut PublicOpinion,
    timeline: &mut Timeline,
    date: &str,
    probability: f64,
    rng: &mut dyn RandomSource,
) -> Option<&'static NewsItem> {
    if rng.next_unit() > probability {
        return None;
    }

    let item = &NEWS_POOL[rng.pick(NEWS_POOL.len())];
    opinion.apply(item.effect);

    let rounded = OpinionShift::new(
        round1(item.effect.conservative),
        round1(item.effect.liberal),
        round1(item.effect.apathetic),
    );
    timeline.push(
        TimelineEvent::new(date, Category::News, item.title, Impact::Neutral)
            .with_description(item.description)
            .with_delta(Delta::from_shift(rounded)),
    );

    tracing::debug!("News rolled: {}", item.title);
    Some(item)
}
