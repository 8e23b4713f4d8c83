use std::io;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use byteorder::{NetworkEndian, WriteBytesExt};
use sha1::{Digest, Sha1};
use socket2::{Domain, Protocol, Socket, Type};
use tokio::net::TcpListener;
use crate::seeder::enums::message_id::MessageId;
use crate::seeder::enums::seeder_error::SeederError;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_id::PeerId;

pub const PROTOCOL_STRING: &[u8] = b"BitTorrent protocol";
pub const PEER_ID_PREFIX: &[u8; 8] = b"-PT0001-";
pub const HANDSHAKE_LENGTH: usize = 1 + PROTOCOL_STRING.len() + 8 + 20 + 20;
pub const UNCHOKE_MESSAGE: [u8; 5] = [0, 0, 0, 1, MessageId::Unchoke as u8];
pub const LISTEN_BACKLOG: i32 = 1024;

pub const CLIENT_CLOSED: &str = "Client closed the connection.";
pub const READ_TIMED_OUT: &str = "Read timed out.";
pub const UNSUPPORTED_PROTOCOL: &str = "Unsupported protocol.";
pub const UNKNOWN_INFO_HASH: &str = "Unknown info hash.";
pub const STOP_SEEDING: &str = "Stop seeding, we have others to seed.";

/// `-PT0001-` followed by the first 12 bytes of SHA-1 over address and port.
pub fn generate_peer_id(external_address: &str, port: u16) -> PeerId
{
    let digest = Sha1::digest(format!("{external_address}{port}").as_bytes());
    let mut peer_id = [0u8; 20];
    peer_id[..8].copy_from_slice(PEER_ID_PREFIX);
    peer_id[8..].copy_from_slice(&digest[..12]);
    PeerId(peer_id)
}

pub fn handshake_message(info_hash: &InfoHash, peer_id: &PeerId) -> Vec<u8>
{
    let mut message = Vec::with_capacity(HANDSHAKE_LENGTH);
    message.push(PROTOCOL_STRING.len() as u8);
    message.extend_from_slice(PROTOCOL_STRING);
    message.extend_from_slice(&[0u8; 8]);
    message.extend_from_slice(&info_hash.0);
    message.extend_from_slice(&peer_id.0);
    message
}

/// One bit per piece, all set. Spare bits of the last byte stay clear.
pub fn full_bitfield(piece_count: u64) -> Vec<u8>
{
    let mut bitfield = vec![0xFFu8; piece_count.div_ceil(8) as usize];
    let spare = piece_count % 8;
    if spare != 0 && let Some(last) = bitfield.last_mut() {
        *last = 0xFFu8 << (8 - spare);
    }
    bitfield
}

pub fn bitfield_message(piece_count: u64) -> io::Result<Vec<u8>>
{
    let bitfield = full_bitfield(piece_count);
    let mut message = Vec::with_capacity(5 + bitfield.len());
    message.write_u32::<NetworkEndian>(1 + bitfield.len() as u32)?;
    message.write_u8(MessageId::Bitfield as u8)?;
    message.extend_from_slice(&bitfield);
    Ok(message)
}

pub fn piece_message(piece_index: u32, block_begin: u32, block: &[u8]) -> io::Result<Vec<u8>>
{
    let mut message = Vec::with_capacity(13 + block.len());
    message.write_u32::<NetworkEndian>(9 + block.len() as u32)?;
    message.write_u8(MessageId::Piece as u8)?;
    message.write_u32::<NetworkEndian>(piece_index)?;
    message.write_u32::<NetworkEndian>(block_begin)?;
    message.extend_from_slice(block);
    Ok(message)
}

/// Binds the listener every seed peer worker accepts from.
#[tracing::instrument(level = "debug")]
pub fn bind_listener(internal_address: &str, port: u16) -> Result<TcpListener, SeederError>
{
    let ip = IpAddr::from_str(internal_address)
        .map_err(|_| SeederError::InvalidAddress(internal_address.to_string()))?;
    let address = SocketAddr::new(ip, port);
    let bind_error = |source: io::Error| SeederError::Bind { address: address.to_string(), source };

    let domain = if address.is_ipv4() { Domain::IPV4 } else { Domain::IPV6 };
    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP)).map_err(bind_error)?;
    socket.set_reuse_address(true).map_err(bind_error)?;
    socket.bind(&address.into()).map_err(bind_error)?;
    socket.listen(LISTEN_BACKLOG).map_err(bind_error)?;
    socket.set_nonblocking(true).map_err(bind_error)?;

    let std_listener: std::net::TcpListener = socket.into();
    Ok(TcpListener::from_std(std_listener)?)
}
