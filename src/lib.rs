#![no_std]

//! `U8Ring`: A zero-allocation byte ring buffer using a client-provided buffer.
//!
//! `U8Ring` is a fixed-capacity circular byte queue for one producer and one
//! consumer. It borrows a caller-owned byte slice and keeps two cursors into
//! it; nothing is ever allocated, resized or freed by the ring.
//!
//! This crate is `no_std` compatible and works in embedded and constrained environments.
//!
//! # Capacity
//!
//! One slot of the storage is sacrificed to tell a full ring from an empty
//! one, so a ring over `N` bytes holds at most `N - 1` bytes. At all times
//! `len() + free() == capacity() - 1`.
//!
//! ```
//! # use u8ring::U8Ring;
//! let mut storage = [0u8; 10];
//! let ring = U8Ring::new(&mut storage).unwrap();
//!
//! assert!(ring.is_empty());
//! assert_eq!(ring.capacity(), 10);
//! assert_eq!(ring.free(), 9);
//! ```
//!
//! # Bulk Transfer
//!
//! `write()`, `read()` and `peek()` move as many bytes as possible and return
//! the count. A count below the request is the normal answer when the ring is
//! short on space or data, not an error:
//!
//! ```
//! # use u8ring::U8Ring;
//! let mut storage = [0u8; 8];
//! let mut ring = U8Ring::new(&mut storage).unwrap();
//!
//! assert_eq!(ring.write(b"hello world"), 7); // only 7 slots are usable
//!
//! let mut out = [0u8; 4];
//! assert_eq!(ring.peek(&mut out), 4);       // look without consuming
//! assert_eq!(&out, b"hell");
//! assert_eq!(ring.len(), 7);
//!
//! assert_eq!(ring.read(&mut out), 4);       // consume
//! assert_eq!(ring.len(), 3);
//!
//! // The next write wraps around the end of the storage
//! assert_eq!(ring.write(b"1234"), 4);
//! let (head, tail) = ring.as_slices();
//! assert_eq!(head, b"o w1");
//! assert_eq!(tail, b"234");
//! ```
//!
//! # Single Bytes
//!
//! ```
//! # use u8ring::{U8Ring, U8RingError};
//! let mut storage = [0u8; 3];
//! let mut ring = U8Ring::new(&mut storage).unwrap();
//!
//! ring.write_byte(b'a').unwrap();
//! ring.write_byte(b'b').unwrap();
//! assert_eq!(ring.write_byte(b'c'), Err(U8RingError::BufferFull));
//!
//! assert_eq!(ring.peek_byte(), Some(b'a'));
//! assert_eq!(ring.read_byte(), Some(b'a'));
//! assert_eq!(ring.read_byte(), Some(b'b'));
//! assert_eq!(ring.read_byte(), None);
//! assert_eq!(ring.try_read_byte(), Err(U8RingError::BufferEmpty));
//! ```
//!
//! # Iterator Support
//!
//! Iterating a ring yields the unread bytes, oldest first, without consuming them:
//!
//! ```
//! # use u8ring::U8Ring;
//! let mut storage = [0u8; 16];
//! let mut ring = U8Ring::new(&mut storage).unwrap();
//! ring.write(b"abc");
//!
//! let collected: Vec<u8> = ring.iter().collect();
//! assert_eq!(collected, b"abc");
//! assert_eq!(ring.len(), 3);
//! ```
//!
//! # `embedded-io`
//!
//! `U8Ring` implements `embedded_io::Read`, `Write`, `ReadReady` and
//! `WriteReady`. Reading an empty ring returns `Ok(0)`; writing to a full
//! ring returns `Err(U8RingError::BufferFull)`.
//!
//! # Concurrency
//!
//! The ring performs no synchronization. It is meant for a single producer
//! and a single consumer; when they run in different contexts (thread and
//! interrupt handler, two cores), the caller provides the locking or memory
//! ordering.

mod core;
mod error;
mod io;
mod iter;

// Re-export public types
pub use crate::core::U8Ring;
pub use error::U8RingError;
pub use iter::U8RingIter;
