//! Comment threading
//!
//! Turns a photo's flat, append-ordered comment list into the two-level
//! presentation tree: top-level comments in append order, each carrying
//! its replies in append order. This is a pure transformation over the
//! comment records and an author lookup; nothing here touches the store.

use std::collections::HashMap;
use uuid::Uuid;

use crate::models::UserSummary;
use crate::models::photo::{CommentNode, CommentRecord, ReplyNode};

/// Outcome of resolving a comment's author against the user directory
///
/// Modeled as an explicit variant rather than an `Option` so the
/// missing-author fallback is a visible, testable path. An author that no
/// longer resolves must never fail the listing.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedAuthor {
    /// The author still exists in the user directory
    Found(UserSummary),
    /// The author id did not resolve; rendered as the "Unknown User" sentinel
    Unknown { user_id: Uuid },
}

impl ResolvedAuthor {
    /// The user summary to render for this author
    pub fn into_summary(self) -> UserSummary {
        match self {
            ResolvedAuthor::Found(summary) => summary,
            ResolvedAuthor::Unknown { user_id } => UserSummary {
                id: user_id,
                first_name: "Unknown".to_string(),
                last_name: "User".to_string(),
            },
        }
    }
}

/// Author lookup capability handed to the threader
pub trait AuthorLookup {
    /// Resolve an author id to a user summary, or the Unknown sentinel
    fn resolve(&self, user_id: Uuid) -> ResolvedAuthor;
}

impl AuthorLookup for HashMap<Uuid, UserSummary> {
    fn resolve(&self, user_id: Uuid) -> ResolvedAuthor {
        match self.get(&user_id) {
            Some(summary) => ResolvedAuthor::Found(summary.clone()),
            None => ResolvedAuthor::Unknown { user_id },
        }
    }
}

/// Thread a photo's comments into the two-level presentation tree
///
/// `comments` must be in append order and belong to a single photo.
/// Top-level output order and per-parent reply order both match append
/// order. A reply whose parent is itself a reply is flattened into the
/// reply list of its nearest top-level ancestor; only a comment whose
/// parent chain leads to a nonexistent comment is omitted.
pub fn thread_comments(comments: &[CommentRecord], authors: &impl AuthorLookup) -> Vec<CommentNode> {
    let parent_of: HashMap<Uuid, Option<Uuid>> = comments
        .iter()
        .map(|c| (c.id, c.parent_id))
        .collect();

    let mut nodes: Vec<CommentNode> = Vec::new();
    let mut slot_of_parent: HashMap<Uuid, usize> = HashMap::new();

    for comment in comments.iter().filter(|c| c.parent_id.is_none()) {
        slot_of_parent.insert(comment.id, nodes.len());
        nodes.push(CommentNode {
            id: comment.id,
            comment: comment.comment.clone(),
            date_time: comment.date_time,
            user: authors.resolve(comment.user_id).into_summary(),
            replies: Vec::new(),
        });
    }

    for comment in comments {
        let Some(parent_id) = comment.parent_id else {
            continue;
        };

        let Some(ancestor) = top_level_ancestor(parent_id, &parent_of) else {
            // Dangling parent reference; nothing to attach the reply to.
            continue;
        };

        if let Some(&slot) = slot_of_parent.get(&ancestor) {
            nodes[slot].replies.push(ReplyNode {
                id: comment.id,
                comment: comment.comment.clone(),
                date_time: comment.date_time,
                user: authors.resolve(comment.user_id).into_summary(),
                parent_id,
            });
        }
    }

    nodes
}

/// Walk a parent chain up to the top-level comment it hangs off
///
/// Returns `None` when the chain leaves the photo's comment set or loops;
/// the write path produces neither, but storage does not forbid them.
fn top_level_ancestor(start: Uuid, parent_of: &HashMap<Uuid, Option<Uuid>>) -> Option<Uuid> {
    let mut current = start;
    for _ in 0..parent_of.len() {
        match parent_of.get(&current)? {
            None => return Some(current),
            Some(next) => current = *next,
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn summary(id: Uuid, first: &str, last: &str) -> UserSummary {
        UserSummary {
            id,
            first_name: first.to_string(),
            last_name: last.to_string(),
        }
    }

    fn record(id: Uuid, user_id: Uuid, parent_id: Option<Uuid>, body: &str, seq: i64) -> CommentRecord {
        CommentRecord {
            id,
            photo_id: Uuid::nil(),
            user_id,
            parent_id,
            comment: body.to_string(),
            date_time: Utc::now() + Duration::seconds(seq),
        }
    }

    #[test]
    fn test_top_level_order_matches_append_order() {
        let author = Uuid::new_v4();
        let authors = HashMap::from([(author, summary(author, "Ellen", "Ripley"))]);

        let ids: Vec<Uuid> = (0..4).map(|_| Uuid::new_v4()).collect();
        let comments: Vec<CommentRecord> = ids
            .iter()
            .enumerate()
            .map(|(i, id)| record(*id, author, None, &format!("comment {}", i), i as i64))
            .collect();

        let nodes = thread_comments(&comments, &authors);

        assert_eq!(nodes.len(), 4);
        let node_ids: Vec<Uuid> = nodes.iter().map(|n| n.id).collect();
        assert_eq!(node_ids, ids);
        assert!(nodes.iter().all(|n| n.replies.is_empty()));
    }

    #[test]
    fn test_replies_group_under_their_parent() {
        // Photo with [A(top), B(top), C(parent=A)] threads to
        // [A{replies:[C]}, B{replies:[]}].
        let author = Uuid::new_v4();
        let authors = HashMap::from([(author, summary(author, "Ellen", "Ripley"))]);

        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let c = Uuid::new_v4();
        let comments = vec![
            record(a, author, None, "A", 0),
            record(b, author, None, "B", 1),
            record(c, author, Some(a), "C", 2),
        ];

        let nodes = thread_comments(&comments, &authors);

        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].id, a);
        assert_eq!(nodes[0].replies.len(), 1);
        assert_eq!(nodes[0].replies[0].id, c);
        assert_eq!(nodes[0].replies[0].parent_id, a);
        assert_eq!(nodes[1].id, b);
        assert!(nodes[1].replies.is_empty());
    }

    #[test]
    fn test_reply_order_matches_append_order() {
        let author = Uuid::new_v4();
        let authors = HashMap::from([(author, summary(author, "Ellen", "Ripley"))]);

        let parent = Uuid::new_v4();
        let r1 = Uuid::new_v4();
        let r2 = Uuid::new_v4();
        let r3 = Uuid::new_v4();
        let comments = vec![
            record(parent, author, None, "parent", 0),
            record(r1, author, Some(parent), "first", 1),
            record(r2, author, Some(parent), "second", 2),
            record(r3, author, Some(parent), "third", 3),
        ];

        let nodes = thread_comments(&comments, &authors);

        let reply_ids: Vec<Uuid> = nodes[0].replies.iter().map(|r| r.id).collect();
        assert_eq!(reply_ids, vec![r1, r2, r3]);
    }

    #[test]
    fn test_missing_author_becomes_unknown_user_sentinel() {
        let known = Uuid::new_v4();
        let vanished = Uuid::new_v4();
        let authors = HashMap::from([(known, summary(known, "Ellen", "Ripley"))]);

        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let comments = vec![
            record(a, vanished, None, "orphaned", 0),
            record(b, known, Some(a), "reply", 1),
        ];

        let nodes = thread_comments(&comments, &authors);

        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].user.id, vanished);
        assert_eq!(nodes[0].user.first_name, "Unknown");
        assert_eq!(nodes[0].user.last_name, "User");
        assert_eq!(nodes[0].replies[0].user.first_name, "Ellen");
    }

    #[test]
    fn test_reply_to_a_reply_flattens_under_top_level_ancestor() {
        let author = Uuid::new_v4();
        let authors = HashMap::from([(author, summary(author, "Ellen", "Ripley"))]);

        let top = Uuid::new_v4();
        let reply = Uuid::new_v4();
        let nested = Uuid::new_v4();
        let comments = vec![
            record(top, author, None, "top", 0),
            record(reply, author, Some(top), "reply", 1),
            record(nested, author, Some(reply), "nested", 2),
        ];

        let nodes = thread_comments(&comments, &authors);

        assert_eq!(nodes.len(), 1);
        let reply_ids: Vec<Uuid> = nodes[0].replies.iter().map(|r| r.id).collect();
        assert_eq!(reply_ids, vec![reply, nested]);
        // The flattened reply still echoes its true parent.
        assert_eq!(nodes[0].replies[1].parent_id, reply);
    }

    #[test]
    fn test_dangling_parent_reference_is_omitted() {
        let author = Uuid::new_v4();
        let authors = HashMap::from([(author, summary(author, "Ellen", "Ripley"))]);

        let top = Uuid::new_v4();
        let comments = vec![
            record(top, author, None, "top", 0),
            record(Uuid::new_v4(), author, Some(Uuid::new_v4()), "dangling", 1),
        ];

        let nodes = thread_comments(&comments, &authors);

        assert_eq!(nodes.len(), 1);
        assert!(nodes[0].replies.is_empty());
    }

    #[test]
    fn test_resolved_author_sentinel_keeps_original_id() {
        let user_id = Uuid::new_v4();
        let rendered = ResolvedAuthor::Unknown { user_id }.into_summary();

        assert_eq!(rendered.id, user_id);
        assert_eq!(rendered.first_name, "Unknown");
        assert_eq!(rendered.last_name, "User");
    }
}
