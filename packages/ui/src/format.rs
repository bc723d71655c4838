//! Display helpers shared by the dashboard and the ticket receipt.

use store::QueueInfo;

/// Load band of a queue by its waiting count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QueueLoad {
    Light,
    Busy,
    Crowded,
}

impl QueueLoad {
    pub fn of(waiting: u32) -> Self {
        match waiting {
            0..=5 => QueueLoad::Light,
            6..=15 => QueueLoad::Busy,
            _ => QueueLoad::Crowded,
        }
    }

    /// Tag class: green, orange, red.
    pub fn tag_class(&self) -> &'static str {
        match self {
            QueueLoad::Light => "tag green",
            QueueLoad::Busy => "tag orange",
            QueueLoad::Crowded => "tag red",
        }
    }
}

pub fn open_tag(queue: &QueueInfo) -> (&'static str, &'static str) {
    if queue.is_active {
        ("tag green", "Open")
    } else {
        ("tag red", "Closed")
    }
}

/// `"7 min"`, or a dash when there is no estimate.
pub fn eta_label(minutes: Option<u32>) -> String {
    match minutes {
        Some(m) => format!("{m} min"),
        None => "\u{2014}".to_string(),
    }
}

/// Average service time without trailing zeros: `2.5`, `3`.
pub fn service_minutes(minutes: f64) -> String {
    let rounded = (minutes * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{rounded:.0}")
    } else {
        format!("{rounded:.1}")
    }
}
