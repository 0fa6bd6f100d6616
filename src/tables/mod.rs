//! Random effect tables: static news and life event data

pub mod life_events;
pub mod news;

pub use life_events::LifeEvent;
pub use news::{roll_news, NewsItem, NEWS_POOL};
