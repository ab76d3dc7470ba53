//! Walkthrough of the simulated link: open it, send two messages, watch
//! the receipts (and, with some luck, a fabricated reply) come back.
//!
//! Run with `cargo run -p realtime-sim --example chat_echo`.

use std::time::Duration;

use chrono::Utc;
use domains::ids;
use domains::models::Message;
use realtime_sim::{LinkEvent, LinkOptions, SimulatedLink};
use tokio::time::timeout;

fn outgoing(text: &str) -> Message {
    Message {
        id: ids::message(),
        conversation_id: "conv-demo".into(),
        sender_id: "user-demo".into(),
        text: text.into(),
        timestamp: Utc::now(),
    }
}

#[tokio::main]
async fn main() {
    let (link, mut events) = SimulatedLink::connect("peer-demo", LinkOptions::default());

    loop {
        match timeout(Duration::from_secs(4), events.recv()).await {
            Ok(Some(LinkEvent::Open)) => {
                println!("link open");
                link.send(outgoing("Hi! I lost a black wallet downtown"))
                    .expect("link just opened");
                link.send(outgoing("Cards and an ID inside, reward offered"))
                    .expect("link just opened");
            }
            Ok(Some(LinkEvent::Delivered(message))) => println!("delivered : {}", message.text),
            Ok(Some(LinkEvent::Inbound(message))) => println!("peer reply: {}", message.text),
            Ok(Some(LinkEvent::Closed)) => {
                println!("link closed");
                break;
            }
            Ok(None) => break,
            // Four quiet seconds: every pending receipt and reply is in.
            Err(_) => link.close(),
        }
    }
}
