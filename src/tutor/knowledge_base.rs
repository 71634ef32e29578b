//! Subject-keyed table of canned knowledge entries.
//!
//! Entries per subject are kept in insertion order; the dispatch engine's
//! first-match policy depends on that order being deterministic.

use crate::models::{DifficultyLevel, KnowledgeEntry};

pub struct KnowledgeBase {
    subjects: Vec<(String, Vec<KnowledgeEntry>)>,
}

impl KnowledgeBase {
    pub fn new(entries: Vec<KnowledgeEntry>) -> Self {
        let mut subjects: Vec<(String, Vec<KnowledgeEntry>)> = Vec::new();
        for entry in entries {
            match subjects.iter_mut().find(|(name, _)| *name == entry.subject) {
                Some((_, list)) => list.push(entry),
                None => subjects.push((entry.subject.clone(), vec![entry])),
            }
        }
        Self { subjects }
    }

    /// The builtin table the platform ships with.
    pub fn builtin() -> Self {
        Self::new(builtin_entries())
    }

    pub fn subjects(&self) -> impl Iterator<Item = &str> {
        self.subjects.iter().map(|(name, _)| name.as_str())
    }

    /// Entries for a subject in insertion order; empty for unknown subjects.
    pub fn entries_for(&self, subject: &str) -> &[KnowledgeEntry] {
        self.subjects
            .iter()
            .find(|(name, _)| name == subject)
            .map(|(_, list)| list.as_slice())
            .unwrap_or(&[])
    }
}

fn builtin_entries() -> Vec<KnowledgeEntry> {
    vec![
        // dbms
        KnowledgeEntry::new(
            "dbms",
            "database normalization",
            "Normalization organizes tables so each fact is stored once. \
             First normal form removes repeating groups. Second normal form removes partial dependencies on a composite key. \
             Third normal form removes transitive dependencies, so every non-key attribute depends on the key, the whole key, and nothing but the key.",
            0.92,
            DifficultyLevel::Intermediate,
        )
        .with_sources(&["Database System Concepts, ch. 7", "Codd (1970)"])
        .with_simplified(
            "Normalization means splitting big tables into smaller ones so you never write the same fact twice. \
             Each fact lives in exactly one place. \
             If a customer's address changes, you update one row and nothing can disagree.",
        )
        .with_hints(&[
            "Start by spotting columns that repeat the same value across many rows",
            "Ask: if I update this value in one row, must I update it elsewhere too?",
        ])
        .with_follow_ups(&[
            "What anomalies does an unnormalized table suffer from?",
            "When is denormalization the right call?",
        ])
        .with_videos(&["https://videos.example.edu/dbms/normal-forms"]),
        KnowledgeEntry::new(
            "dbms",
            "transaction",
            "A transaction groups statements into one all-or-nothing unit with ACID guarantees: \
             atomicity, consistency, isolation, and durability. Either every statement commits or none do.",
            0.9,
            DifficultyLevel::Beginner,
        )
        .with_sources(&["Database System Concepts, ch. 17"])
        .with_follow_ups(&["What isolation levels does SQL define?"]),
        // Overlaps with "transaction" above; which one wins depends on the
        // engine's match policy.
        KnowledgeEntry::new(
            "dbms",
            "transaction management",
            "Transaction management is the machinery around transactions: the log, the lock manager, and recovery. \
             Write-ahead logging persists intent before data pages change. Two-phase locking serializes conflicting access, and ARIES-style recovery replays the log after a crash.",
            0.85,
            DifficultyLevel::Advanced,
        )
        .with_sources(&["ARIES paper (Mohan et al., 1992)"])
        .with_simplified(
            "The database keeps a diary of what it is about to do. \
             If it crashes, it re-reads the diary and finishes or undoes the interrupted work.",
        ),
        KnowledgeEntry::new(
            "dbms",
            "indexing",
            "An index is an auxiliary structure that maps key values to row locations, usually a B+-tree. \
             Lookups and range scans touch O(log n) pages instead of scanning the table. Every index slows writes, since each insert must update it.",
            0.88,
            DifficultyLevel::Intermediate,
        )
        .with_sources(&["Database System Concepts, ch. 14"])
        .with_code_snippet("CREATE INDEX idx_orders_customer ON orders (customer_id, created_at);")
        .with_hints(&["Index the columns your WHERE clauses filter on"])
        .with_videos(&["https://videos.example.edu/dbms/btree-indexes"]),
        KnowledgeEntry::new(
            "dbms",
            "sql join",
            "A join combines rows from two tables on a predicate. \
             Inner joins keep only matching pairs. Outer joins keep unmatched rows from one or both sides, padding the other side with NULLs.",
            0.9,
            DifficultyLevel::Beginner,
        )
        .with_sources(&["SQL:2016 standard, part 2"])
        .with_code_snippet(
            "SELECT c.name, o.total\nFROM customers c\nLEFT JOIN orders o ON o.customer_id = c.id;",
        ),
        // os
        KnowledgeEntry::new(
            "os",
            "process scheduling",
            "The scheduler decides which runnable process gets the CPU next. \
             Round-robin rotates a ready queue on a time quantum. Priority schedulers pick the highest-priority runnable process, and multilevel feedback queues demote CPU hogs toward lower priorities.",
            0.87,
            DifficultyLevel::Intermediate,
        )
        .with_sources(&["Operating System Concepts, ch. 5"])
        .with_diagram(
            "ready queue -> [CPU] -> blocked on I/O -> back to ready queue",
        )
        .with_follow_ups(&["How does a context switch actually happen?"]),
        KnowledgeEntry::new(
            "os",
            "deadlock",
            "A deadlock is a cycle of processes each waiting for a resource the next one holds. \
             It requires mutual exclusion, hold-and-wait, no preemption, and circular wait all at once. Breaking any one condition prevents it.",
            0.9,
            DifficultyLevel::Advanced,
        )
        .with_sources(&["Operating System Concepts, ch. 8"])
        .with_simplified(
            "Two programs each hold something the other needs, and both refuse to let go. \
             Neither can ever move again unless someone takes a resource away.",
        )
        .with_hints(&["Draw the wait-for graph and look for a cycle"]),
        KnowledgeEntry::new(
            "os",
            "virtual memory",
            "Virtual memory gives each process its own address space, mapped to physical frames by page tables. \
             The MMU translates addresses on every access, faulting when a page is absent so the kernel can load it from disk.",
            0.86,
            DifficultyLevel::Intermediate,
        )
        .with_sources(&["Operating System Concepts, ch. 10"]),
        // networking
        KnowledgeEntry::new(
            "networking",
            "tcp",
            "TCP provides a reliable, ordered byte stream over IP. \
             Sequence numbers and acknowledgements detect loss, retransmission repairs it, and congestion control paces the sender to what the network can carry.",
            0.91,
            DifficultyLevel::Intermediate,
        )
        .with_sources(&["RFC 9293"])
        .with_follow_ups(&["Why does the handshake need three messages?"])
        .with_videos(&["https://videos.example.edu/net/tcp-internals"]),
        KnowledgeEntry::new(
            "networking",
            "dns",
            "DNS resolves names to addresses through a distributed hierarchy. \
             Resolvers walk from the root to the authoritative server, caching each answer for its TTL.",
            0.89,
            DifficultyLevel::Beginner,
        )
        .with_sources(&["RFC 1034", "RFC 1035"]),
        // algorithms
        KnowledgeEntry::new(
            "algorithms",
            "recursion",
            "A recursive function solves a problem by calling itself on smaller inputs until a base case answers directly. \
             Every call must shrink the problem, and the base case must be reachable, or the recursion never terminates.",
            0.9,
            DifficultyLevel::Beginner,
        )
        .with_sources(&["SICP, ch. 1"])
        .with_code_snippet(
            "fn factorial(n: u64) -> u64 {\n    if n == 0 { 1 } else { n * factorial(n - 1) }\n}",
        ),
        KnowledgeEntry::new(
            "algorithms",
            "dynamic programming",
            "Dynamic programming solves problems with overlapping subproblems by storing each subresult once. \
             Top-down memoizes a recursion; bottom-up fills a table in dependency order. Both turn exponential recursions into polynomial ones.",
            0.85,
            DifficultyLevel::Advanced,
        )
        .with_sources(&["Introduction to Algorithms, ch. 14"])
        .with_simplified(
            "Write down the answer to every small piece the first time you work it out, \
             then look it up instead of re-solving it. Big problems become cheap because the pieces repeat.",
        )
        .with_hints(&["Define the subproblem before writing any code"])
        .with_follow_ups(&["What distinguishes memoization from tabulation?"]),
    ]
}
