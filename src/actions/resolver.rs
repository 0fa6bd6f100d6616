//! Action resolution: vote, talk, post
//!
//! Each action spends one action point, changes status/opinion (and for
//! talk and post, a friend or the follower count), logs exactly one entry,
//! then rolls for post-action news. Callers check the preconditions
//! (action points left, no terminal flag) before calling in.

use crate::actions::catalog::ActionKind;
use crate::core::config::Tuning;
use crate::core::rng::RandomSource;
use crate::game::state::GameState;
use crate::model::{OpinionShift, StatusShift};
use crate::tables::roll_news;
use crate::timeline::{Category, Delta, Impact, TimelineEvent};

const VOTE_APATHY: f64 = -3.0;
const TALK_APATHY: f64 = -1.0;

/// Post influence multiplier: `min(cap, 1 + followers * coeff)`.
///
/// `baseline_followers` is the follower count from before the post's own
/// follower change. The post's delta never feeds its own multiplier.
pub fn influence_multiplier(baseline_followers: u32, tuning: &Tuning) -> f64 {
    (1.0 + baseline_followers as f64 * tuning.sns_influence_coeff).min(tuning.sns_influence_cap)
}

/// One talk swing: random sign, magnitude 1 (70%) or 2 (30%)
pub fn draw_swing(rng: &mut dyn RandomSource) -> f64 {
    let sign = rng.sign();
    let magnitude = if rng.chance(0.7) { 1.0 } else { 2.0 };
    sign * magnitude
}

/// Resolve `kind` against `state`.
///
/// Returns false without touching `state` if the action cannot target
/// anything (talk with an empty roster).
pub fn resolve_action(
    state: &mut GameState,
    kind: ActionKind,
    tuning: &Tuning,
    rng: &mut dyn RandomSource,
) -> bool {
    if kind == ActionKind::Talk && state.friends.is_empty() {
        return false;
    }

    state.action_points = state.action_points.saturating_sub(kind.cost());

    match kind {
        ActionKind::Vote => vote(state),
        ActionKind::Talk => talk(state, tuning, rng),
        ActionKind::Post => post(state, tuning, rng),
    }

    let date = state.date_label();
    roll_news(
        &mut state.opinion,
        &mut state.events,
        &date,
        tuning.post_action_news_prob,
        rng,
    );

    true
}

fn vote(state: &mut GameState) {
    let shift = OpinionShift::new(0.0, 0.0, VOTE_APATHY);
    state.opinion.apply(shift);
    state.status.apply(StatusShift::new(0.0, 2.0, -5.0));

    state.events.push(
        TimelineEvent::new(state.date_label(), Category::Action, "Went to vote", Impact::Good)
            .with_description("Making your choice known stirred a little interest around you.")
            .with_delta(Delta::from_shift(shift)),
    );
}

fn talk(state: &mut GameState, tuning: &Tuning, rng: &mut dyn RandomSource) {
    let delta_cons = draw_swing(rng);
    let delta_lib = draw_swing(rng);
    let friend_shift = OpinionShift::new(delta_cons, delta_lib, TALK_APATHY);

    let name = match state.friends.talk_target_mut() {
        Some(friend) => {
            friend.nudge(friend_shift);
            friend.name.clone()
        }
        None => return,
    };

    state.opinion.apply(friend_shift.scaled(tuning.talk_spread));
    state.status.apply(StatusShift::new(3.0, 0.0, -3.0));

    tracing::debug!(
        "Talked with {}: cons {:+}, lib {:+}, apa {:+}",
        name,
        delta_cons,
        delta_lib,
        TALK_APATHY
    );

    state.events.push(
        TimelineEvent::new(
            state.date_label(),
            Category::Friend,
            format!("Talked with {}", name),
            Impact::Neutral,
        )
        .with_description("Your friend's leaning shifted a little, with faint ripples in public opinion.")
        .with_delta(Delta::from_shift(friend_shift)),
    );
}

fn post(state: &mut GameState, tuning: &Tuning, rng: &mut dyn RandomSource) {
    let baseline = state.followers.count();

    let bad = rng.chance(tuning.outrage_prob());
    let delta_followers = if bad {
        -rng.range_inclusive(5, 30)
    } else {
        rng.range_inclusive(10, 40)
    };
    state.followers.apply(delta_followers);

    let mul = influence_multiplier(baseline, tuning);
    let (opinion, status) = if bad {
        (
            OpinionShift::new(0.5, -0.5, 1.0),
            StatusShift::new(-2.0, -4.0, -2.0),
        )
    } else {
        (
            OpinionShift::new(0.0, 1.0, -0.5),
            StatusShift::new(2.0, 1.0, -2.0),
        )
    };
    state.opinion.apply(opinion.scaled(mul));
    state.status.apply(status);

    if bad {
        tracing::debug!("Post backfired: followers {:+}", delta_followers);
    }

    let (impact, description) = if bad {
        (
            Impact::Bad,
            "It blew up. Followers dropped, trust fell and interest cooled.",
        )
    } else {
        (
            Impact::Good,
            "It landed. Followers grew and interest rose a little.",
        )
    };
    state.events.push(
        TimelineEvent::new(state.date_label(), Category::Sns, "Posted on social media", impact)
            .with_description(description)
            .with_delta(Delta::followers(delta_followers)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::ScriptedRandom;
    use crate::model::{Followers, PublicOpinion};

    /// Fresh state with a known follower count, built without random draws
    /// leaking into the action under test
    fn state_with_followers(followers: u32) -> GameState {
        let mut setup = ScriptedRandom::constant(0.5);
        let mut state = GameState::new_game(&Tuning::default(), &mut setup);
        state.followers = Followers::new(followers);
        state
    }

    /// Tuning with post-action news disabled
    fn quiet() -> Tuning {
        Tuning {
            post_action_news_prob: 0.0,
            ..Tuning::default()
        }
    }

    #[test]
    fn test_vote() {
        let mut state = state_with_followers(100);
        let before = state.events.len();
        let mut rng = ScriptedRandom::constant(0.99);

        assert!(resolve_action(&mut state, ActionKind::Vote, &quiet(), &mut rng));

        assert_eq!(state.action_points, 2);
        assert_eq!(state.opinion.apathetic(), 57.0);
        assert_eq!(state.status.credibility(), 52.0);
        assert_eq!(state.status.energy(), 75.0);
        assert_eq!(state.events.len(), before + 1);

        let entry = state.events.newest().unwrap();
        assert_eq!(entry.category, Category::Action);
        assert_eq!(entry.impact, Impact::Good);
        assert_eq!(entry.delta.unwrap().apa, Some(-3.0));
    }

    #[test]
    fn test_talk_swings_first_friend() {
        let mut state = state_with_followers(100);
        let target = state.friends.talk_target().unwrap().clone();
        // cons: sign +, magnitude 2; lib: sign -, magnitude 1
        let mut rng = ScriptedRandom::new([0.9, 0.8, 0.1, 0.2]);

        assert!(resolve_action(&mut state, ActionKind::Talk, &quiet(), &mut rng));

        let after = state.friends.talk_target().unwrap();
        assert_eq!(after.id, target.id);
        assert_eq!(after.leaning().conservative(), target.leaning().conservative() + 2.0);
        assert_eq!(after.leaning().liberal(), target.leaning().liberal() - 1.0);
        assert_eq!(after.leaning().apathetic(), target.leaning().apathetic() - 1.0);

        assert!((state.opinion.conservative() - 70.4).abs() < 1e-9);
        assert!((state.opinion.liberal() - 69.8).abs() < 1e-9);
        assert!((state.opinion.apathetic() - 59.8).abs() < 1e-9);
        assert_eq!(state.status.comm(), 53.0);
        assert_eq!(state.status.energy(), 77.0);

        let delta = state.events.newest().unwrap().delta.unwrap();
        assert_eq!((delta.cons, delta.lib, delta.apa), (Some(2.0), Some(-1.0), Some(-1.0)));
    }

    #[test]
    fn test_talk_other_friends_untouched() {
        let mut state = state_with_followers(100);
        let others: Vec<_> = state.friends.iter().skip(1).cloned().collect();
        let mut rng = ScriptedRandom::constant(0.3);

        resolve_action(&mut state, ActionKind::Talk, &quiet(), &mut rng);

        let now: Vec<_> = state.friends.iter().skip(1).cloned().collect();
        assert_eq!(now, others);
    }

    #[test]
    fn test_good_post() {
        let mut state = state_with_followers(1000);
        // not outraged, follower draw 0.0 -> +10
        let mut rng = ScriptedRandom::new([0.5, 0.0]);

        assert!(resolve_action(&mut state, ActionKind::Post, &quiet(), &mut rng));

        assert_eq!(state.followers.count(), 1010);
        // multiplier from 1000 followers: 1.5
        assert_eq!(state.opinion.conservative(), 70.0);
        assert!((state.opinion.liberal() - 71.5).abs() < 1e-9);
        assert!((state.opinion.apathetic() - 59.25).abs() < 1e-9);
        assert_eq!(state.status.comm(), 52.0);
        assert_eq!(state.status.credibility(), 51.0);
        assert_eq!(state.status.energy(), 78.0);

        let entry = state.events.newest().unwrap();
        assert_eq!(entry.impact, Impact::Good);
        assert_eq!(entry.delta.unwrap().followers, Some(10));
    }

    #[test]
    fn test_bad_post() {
        let mut state = state_with_followers(20);
        // outraged, follower draw near 1.0 -> -30
        let mut rng = ScriptedRandom::new([0.01, 0.999]);

        resolve_action(&mut state, ActionKind::Post, &quiet(), &mut rng);

        assert_eq!(state.followers.count(), 0);
        let mul = 1.0 + 20.0 * 0.0005;
        assert!((state.opinion.conservative() - (70.0 + 0.5 * mul)).abs() < 1e-9);
        assert!((state.opinion.liberal() - (70.0 - 0.5 * mul)).abs() < 1e-9);
        assert!((state.opinion.apathetic() - (60.0 + mul)).abs() < 1e-9);
        assert_eq!(state.status.comm(), 48.0);
        assert_eq!(state.status.credibility(), 46.0);

        let entry = state.events.newest().unwrap();
        assert_eq!(entry.impact, Impact::Bad);
        assert_eq!(entry.delta.unwrap().followers, Some(-30));
    }

    #[test]
    fn test_influence_uses_baseline_followers() {
        let tuning = Tuning::default();
        assert_eq!(influence_multiplier(0, &tuning), 1.0);
        assert_eq!(influence_multiplier(1000, &tuning), 1.5);
        assert_eq!(influence_multiplier(1_000_000, &tuning), 2.5);
    }

    #[test]
    fn test_post_action_news_roll() {
        let mut state = state_with_followers(100);
        let tuning = Tuning {
            post_action_news_prob: 1.0,
            ..Tuning::default()
        };
        // news hit, pick entry 0
        let mut rng = ScriptedRandom::new([0.0, 0.0]);

        resolve_action(&mut state, ActionKind::Vote, &tuning, &mut rng);

        let categories: Vec<_> = state.events.latest(2).map(|e| e.category).collect();
        assert_eq!(categories, [Category::News, Category::Action]);
        assert!((state.opinion.apathetic() - 56.5).abs() < 1e-9);
    }

    #[test]
    fn test_post_action_news_ignores_daily_probability() {
        let mut state = state_with_followers(100);
        let before = state.events.len();
        let tuning = Tuning {
            post_action_news_prob: 0.3,
            news_daily_prob: 0.9,
            ..Tuning::default()
        };
        // news draw 0.5 would hit at the daily rate only
        let mut rng = ScriptedRandom::new([0.5, 0.0]);

        resolve_action(&mut state, ActionKind::Vote, &tuning, &mut rng);

        assert_eq!(state.events.len(), before + 1);
        assert_eq!(state.events.newest().unwrap().category, Category::Action);
        assert!(state.events.iter().all(|e| e.category != Category::News));
    }

    #[test]
    fn test_talk_with_empty_roster_is_refused() {
        let mut state = state_with_followers(100);
        state.friends = Default::default();
        let snapshot = state.clone();
        let mut rng = ScriptedRandom::constant(0.5);

        assert!(!resolve_action(&mut state, ActionKind::Talk, &quiet(), &mut rng));
        assert_eq!(state, snapshot);
    }

    #[test]
    fn test_scores_stay_clamped() {
        let mut state = state_with_followers(100);
        state.opinion = PublicOpinion::new(100.0, 0.0, 1.0);
        state.action_points = 50;
        let mut rng = ScriptedRandom::constant(0.6);

        for _ in 0..40 {
            for kind in ActionKind::ALL {
                resolve_action(&mut state, kind, &Tuning::default(), &mut rng);
                assert!(state.in_bounds());
            }
        }
    }
}
