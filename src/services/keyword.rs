// src/services/keyword.rs
use super::responder::{Responder, ResponderError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Rumtek,
    Enchey,
    Pemayangtse,
    Festival,
    Visiting,
    Greeting,
    Unknown,
}

const GREETINGS: &[&str] = &["hello", "hi", "hey", "namaste", "tashi"];

/// Order matters: a question naming a monastery wins over a generic
/// festival or visiting question.
pub fn detect_topic(msg: &str) -> Topic {
    let msg_lower = msg.to_lowercase();

    if msg_lower.contains("rumtek") {
        Topic::Rumtek
    } else if msg_lower.contains("enchey") {
        Topic::Enchey
    } else if msg_lower.contains("pemayangtse") {
        Topic::Pemayangtse
    } else if ["festival", "cham", "losar"].iter().any(|k| msg_lower.contains(k)) {
        Topic::Festival
    } else if msg_lower.contains("visit") || msg_lower.contains("time") {
        Topic::Visiting
    } else if msg_lower
        .split(|c: char| !c.is_alphanumeric())
        .any(|word| GREETINGS.contains(&word))
    {
        Topic::Greeting
    } else {
        Topic::Unknown
    }
}

pub fn generate_reply(topic: Topic) -> String {
    let reply = match topic {
        Topic::Rumtek => {
            "Rumtek Monastery is one of the most important monasteries in Sikkim! \
             It serves as the seat of the Karmapa and houses precious Buddhist artifacts. \
             Visit our Rumtek page for virtual tours and detailed information."
        }
        Topic::Enchey => {
            "Enchey Monastery is a beautiful 200-year-old monastery above Gangtok, \
             famous for its annual Cham dance festival. Check out our Enchey page for more details!"
        }
        Topic::Pemayangtse => {
            "Pemayangtse Monastery, near Pelling, is one of the oldest monasteries in Sikkim \
             and is known for its seven-tiered wooden model of the celestial palace. \
             See our Pemayangtse page for history and visiting information."
        }
        Topic::Festival => {
            "Sikkim monasteries host amazing festivals like Losar (New Year), Saga Dawa, \
             and spectacular Cham masked dances. Each monastery page has a cultural calendar \
             with festival dates!"
        }
        Topic::Visiting => {
            "The best time to visit monasteries is March-May (spring flowers) and \
             October-December (clear mountain views & festivals). Each monastery page has \
             specific visiting information!"
        }
        Topic::Greeting => "Tashi Delek! How can I help you explore Sikkim's monasteries today?",
        Topic::Unknown => {
            "I can help you learn about Sikkim's monasteries! Try asking about specific \
             monasteries like Rumtek, Enchey, or Pemayangtse, or ask about festivals, \
             visiting times, and locations."
        }
    };
    reply.to_string()
}

/// Built-in responder used when no upstream inference service is configured.
#[derive(Debug, Default, Clone)]
pub struct KeywordResponder;

impl KeywordResponder {
    pub fn new() -> Self {
        Self
    }
}

impl Responder for KeywordResponder {
    fn get_response(&self, text: &str) -> Result<String, ResponderError> {
        let topic = detect_topic(text);
        tracing::debug!(?topic, "keyword responder matched");
        Ok(generate_reply(topic))
    }
}
