//! Sends a handful of VBAN datagrams over loopback and decodes them.
//!
//! Run with:
//!   cargo run --example udp-loopback
//!
//! Counter 3 is skipped and the last datagram rewinds, so the tracker
//! reports one gap and one regression.

use std::net::UdpSocket;

use vbanprims::frame::{
    decode_packet, encode_packet, FrameSequenceTracker, Header, MAX_PACKET_SIZE,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let receiver = UdpSocket::bind("127.0.0.1:0")?;
    let sender = UdpSocket::bind("127.0.0.1:0")?;
    sender.connect(receiver.local_addr()?)?;

    for counter in [1u32, 2, 4, 5, 2] {
        let header = Header {
            samples_per_frame: 255,
            format_byte2: 1,
            format_byte3: 0x01,
            frame_counter: counter,
            ..Header::new(48_000, "Loopback")
        };
        sender.send(&encode_packet(&header, &[0u8; 512])?)?;
    }

    let mut tracker = FrameSequenceTracker::new();
    let mut buf = [0u8; MAX_PACKET_SIZE];
    for _ in 0..5 {
        let (len, from) = receiver.recv_from(&mut buf)?;
        let packet = decode_packet(&buf[..len])?;
        eprintln!(
            "{from}: stream={} rate={}Hz counter={} payload={}B",
            packet.header.stream_name,
            packet.header.sample_rate,
            packet.header.frame_counter,
            packet.payload.len()
        );
        if let Some(event) = tracker.observe(&packet.header) {
            eprintln!("  {event:?}");
        }
    }

    Ok(())
}
