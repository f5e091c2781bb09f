use std::borrow::Cow;
use std::fmt::{self, Display, Formatter};

use raw_collections::collections::contiguous::{Record, RecordVector};
use raw_collections::collections::linked::ForwardList;

const NAME_LEN: usize = 50;

/// A user with a fixed size name, so that it can be stored without any additional allocations.
#[derive(Debug, Clone, Copy, PartialEq)]
struct User {
    name: [u8; NAME_LEN],
    id: i16,
}

impl User {
    /// Creates a new user, truncating `name` to fit if required.
    fn new(name: &str, id: i16) -> User {
        let mut buf = [0; NAME_LEN];
        let len = name.len().min(NAME_LEN);
        buf[..len].copy_from_slice(&name.as_bytes()[..len]);
        User { name: buf, id }
    }

    /// The name, up to the first nul byte.
    fn name(&self) -> Cow<'_, str> {
        let len = self.name.iter().position(|b| *b == 0).unwrap_or(NAME_LEN);
        String::from_utf8_lossy(&self.name[..len])
    }
}

impl Record for User {
    // The name followed by the id, matching the layout of a C struct { char[50]; short; }.
    const WIDTH: usize = NAME_LEN + i16::WIDTH;

    fn write_bytes(&self, bytes: &mut [u8]) {
        bytes[..NAME_LEN].copy_from_slice(&self.name);
        self.id.write_bytes(&mut bytes[NAME_LEN..]);
    }

    fn read_bytes(bytes: &[u8]) -> Self {
        let mut name = [0; NAME_LEN];
        name.copy_from_slice(&bytes[..NAME_LEN]);
        User {
            name,
            id: i16::read_bytes(&bytes[NAME_LEN..]),
        }
    }
}

impl Display for User {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "name: {}, id: {}", self.name(), self.id)
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    println!("\n[RecordVector]\n");

    let mut users = RecordVector::new();
    users.push(&User::new("meg", 1));
    users.push(&User::new("bobo", 2));
    users.push(&User::new("rigby", 3));

    for (index, user) in users.iter().enumerate() {
        println!("Index: [{index}], {user}");
    }

    if let Some(user) = users.pop() {
        println!("Popped User - {user}");
    }
    tracing::info!(len = users.len(), cap = users.cap(), "finished with users");

    println!("\n[ForwardList]\n");

    let mut list = ForwardList::new();
    list.push_back(5);
    list.push_back(10);
    list.push_back(20);
    list.push_back(40);

    list.traverse(|node| println!("Node value: {}", node.value()));
    tracing::info!(len = list.len(), "finished with list");
}
