//! Fixed thread every chat activation starts from

use chrono::{Duration, Utc};

use super::{Message, Sender};

/// Build the seed thread, timestamped relative to now
pub fn seed_thread() -> Vec<Message> {
    let now = Utc::now();
    let minutes_ago = |m: i64| now - Duration::minutes(m);

    vec![
        Message {
            id: "1".to_string(),
            sender: Sender::System,
            content: "Thanks, passing you to the right team now.".to_string(),
            timestamp: minutes_ago(22),
            seen: false,
            has_bot: true,
        },
        Message {
            id: "2".to_string(),
            sender: Sender::Agent,
            content: "Let me just look into this for you, Nikola.".to_string(),
            timestamp: minutes_ago(20),
            seen: false,
            has_bot: false,
        },
        Message {
            id: "3".to_string(),
            sender: Sender::Agent,
            content: "We understand if your purchase didn't quite meet your expectations. \
                To help you with a refund, please provide your order ID and proof of purchase.\n\n\
                Just a heads-up:\n\
                We can only refund orders from the last 60 days.\n\
                Your item must meet our return condition requirements.\n\n\
                Once confirmed, I'll send you a returns QR code for easy processing.\n\n\
                Thanks for your cooperation!"
                .to_string(),
            timestamp: minutes_ago(21),
            seen: true,
            has_bot: false,
        },
        Message {
            id: "4".to_string(),
            sender: Sender::User,
            content: "I placed the order over 60 days ago 😔. Could you make an exception, please?"
                .to_string(),
            timestamp: minutes_ago(21),
            seen: false,
            has_bot: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_thread_shape() {
        let thread = seed_thread();
        assert_eq!(thread.len(), 4);
        assert_eq!(thread[0].sender, Sender::System);
        assert!(thread[0].has_bot);
        assert!(thread[2].seen);
        assert_eq!(thread[3].sender, Sender::User);
    }
}
