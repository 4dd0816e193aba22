//! Replays recorded interactions from a cassette.

use std::collections::{HashMap, VecDeque};

use super::format::{Cassette, Interaction};

/// Serves a cassette's interactions in recorded order, one queue per
/// port/method pair, so generation and download calls can interleave.
#[derive(Debug)]
pub struct CassetteReplayer {
    queues: HashMap<(String, String), VecDeque<Interaction>>,
    current: Option<Interaction>,
}

impl CassetteReplayer {
    /// Build a replayer from a loaded cassette.
    #[must_use]
    pub fn new(cassette: &Cassette) -> Self {
        let mut queues: HashMap<(String, String), VecDeque<Interaction>> = HashMap::new();
        for interaction in &cassette.interactions {
            queues
                .entry((interaction.port.clone(), interaction.method.clone()))
                .or_default()
                .push_back(interaction.clone());
        }
        Self { queues, current: None }
    }

    /// Return the next interaction for the given port and method.
    ///
    /// # Panics
    ///
    /// Panics if the cassette has no (more) interactions for the pair.
    pub fn next_interaction(&mut self, port: &str, method: &str) -> &Interaction {
        let key = (port.to_string(), method.to_string());
        if !self.queues.contains_key(&key) {
            let mut available: Vec<String> =
                self.queues.keys().map(|(p, m)| format!("{p}::{m}")).collect();
            available.sort();
            panic!(
                "Cassette exhausted: no interactions recorded for port={port:?} method={method:?}. \
                 Available port::method pairs: [{}]",
                available.join(", ")
            );
        }
        let Some(next) = self.queues.get_mut(&key).and_then(VecDeque::pop_front) else {
            panic!(
                "Cassette exhausted: every interaction for port={port:?} method={method:?} \
                 has been consumed."
            );
        };
        self.current.insert(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    fn interaction(seq: u64, port: &str, method: &str) -> Interaction {
        Interaction {
            seq,
            port: port.into(),
            method: method.into(),
            input: json!({}),
            output: json!({"Ok": {}}),
        }
    }

    fn cassette(interactions: Vec<Interaction>) -> Cassette {
        Cassette { name: "test".into(), recorded_at: Utc::now(), commit: "abc".into(), interactions }
    }

    #[test]
    fn ports_are_served_independently() {
        let mut replayer = CassetteReplayer::new(&cassette(vec![
            interaction(0, "image_generator", "generate"),
            interaction(1, "image_downloader", "fetch"),
            interaction(2, "image_downloader", "fetch"),
        ]));

        assert_eq!(replayer.next_interaction("image_downloader", "fetch").seq, 1);
        assert_eq!(replayer.next_interaction("image_generator", "generate").seq, 0);
        assert_eq!(replayer.next_interaction("image_downloader", "fetch").seq, 2);
    }

    #[test]
    #[should_panic(expected = "has been consumed")]
    fn exhausted_queue_panics() {
        let mut replayer =
            CassetteReplayer::new(&cassette(vec![interaction(0, "image_generator", "generate")]));
        let _ = replayer.next_interaction("image_generator", "generate");
        let _ = replayer.next_interaction("image_generator", "generate");
    }

    #[test]
    #[should_panic(expected = "no interactions recorded")]
    fn unknown_port_panics() {
        let mut replayer = CassetteReplayer::new(&cassette(vec![]));
        let _ = replayer.next_interaction("image_downloader", "fetch");
    }
}
