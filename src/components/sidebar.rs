//! Category sidebar

use chrono::{DateTime, Duration, Utc};
use dioxus::prelude::*;

use crate::catalog::CATEGORIES;

static QUICK_STATS: &[(&str, &str)] = &[
    ("80+", "Active Services"),
    ("2.5M+", "Monthly Generations"),
    ("1.2s", "Avg Response Time"),
    ("4.9/5", "User Rating"),
];

/// Demo activity feed; offsets are minutes before now.
static RECENT_ACTIVITY: &[(&str, i64)] = &[
    ("DALL-E 3", 2),
    ("Minimax Video-01", 5),
    ("ElevenLabs", 12),
];

#[component]
pub fn CategorySidebar() -> Element {
    let now = Utc::now();
    let activity: Vec<(&'static str, String)> = RECENT_ACTIVITY
        .iter()
        .map(|(service, minutes)| (*service, format_time_ago(now - Duration::minutes(*minutes))))
        .collect();

    rsx! {
        aside {
            class: "fixed left-0 top-16 bottom-0 w-80 glass border-r border-white/20 p-6 overflow-y-auto scrollbar-hide z-40",
            div {
                class: "space-y-6",

                // Quick Stats
                div {
                    class: "grid grid-cols-2 gap-3",
                    for (value, label) in QUICK_STATS {
                        div {
                            class: "glass p-3 rounded-lg text-center",
                            div { class: "text-sm font-bold text-gray-900", "{value}" }
                            div { class: "text-xs text-gray-600", "{label}" }
                        }
                    }
                }

                // Categories
                div {
                    class: "space-y-3",
                    h3 { class: "text-lg font-semibold text-gray-900 mb-4", "Categories" }
                    for category in CATEGORIES {
                        Link {
                            to: category.route.clone(),
                            class: "group block p-4 glass rounded-xl hover:shadow-glow transition-all duration-300 border border-transparent hover:border-white/30",
                            div {
                                class: "flex items-center space-x-3 mb-2",
                                div {
                                    class: "p-2 rounded-lg bg-gradient-to-br {category.gradient} shadow-lg group-hover:shadow-xl transition-shadow duration-300 text-lg",
                                    "{category.icon}"
                                }
                                div {
                                    class: "flex-1",
                                    h4 {
                                        class: "font-semibold text-gray-900 group-hover:text-electric-blue transition-colors duration-200",
                                        "{category.name}"
                                    }
                                    span {
                                        class: "text-xs text-gray-500 bg-gray-100 px-2 py-1 rounded-full",
                                        "{category.count()} services"
                                    }
                                }
                            }
                            p {
                                class: "text-sm text-gray-600 group-hover:text-gray-700 transition-colors duration-200",
                                "{category.description}"
                            }
                        }
                    }
                }

                // Recent Activity
                div {
                    class: "space-y-3",
                    h3 { class: "text-lg font-semibold text-gray-900", "Recent Activity" }
                    div {
                        class: "space-y-2",
                        for (service, label) in activity {
                            div {
                                class: "flex items-center space-x-3 p-2 glass rounded-lg hover:bg-white/10 transition-colors duration-200",
                                div { class: "w-2 h-2 bg-neon-green rounded-full animate-pulse" }
                                div {
                                    class: "flex-1",
                                    div { class: "text-sm font-medium text-gray-900", "{service}" }
                                    div { class: "text-xs text-gray-600", "{label}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Relative-time label for the activity feed.
fn format_time_ago(time: DateTime<Utc>) -> String {
    let diff = Utc::now().signed_duration_since(time);

    let minutes = diff.num_minutes();
    let hours = diff.num_hours();
    let days = diff.num_days();

    if minutes < 1 {
        "Just now".to_string()
    } else if minutes < 60 {
        format!("{} min ago", minutes)
    } else if hours < 24 {
        format!("{} hr ago", hours)
    } else if days == 1 {
        "Yesterday".to_string()
    } else {
        format!("{} days ago", days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_labels_cover_each_granularity() {
        let now = Utc::now();
        assert_eq!(format_time_ago(now), "Just now");
        assert_eq!(format_time_ago(now - Duration::minutes(5)), "5 min ago");
        assert_eq!(format_time_ago(now - Duration::hours(3)), "3 hr ago");
        assert_eq!(format_time_ago(now - Duration::days(1)), "Yesterday");
        assert_eq!(format_time_ago(now - Duration::days(6)), "6 days ago");
    }
}
