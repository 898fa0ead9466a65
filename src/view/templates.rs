use askama::Template;

use crate::view::board::{Board, CardView};
use crate::view::message::MessageBanner;

/// Full page: activity list, signup form and banner.
#[derive(Template)]
#[template(path = "index.html")]
pub struct PageTemplate<'a> {
    pub board: &'a Board,
    pub banner: &'a MessageBanner,
    pub oob: bool,
}

/// Answer to a mutation: banner plus the patched card, both swapped in by id.
#[derive(Template)]
#[template(path = "mutation.html")]
pub struct MutationTemplate<'a> {
    pub banner: &'a MessageBanner,
    pub card: Option<&'a CardView>,
    pub oob: bool,
}

#[derive(Template)]
#[template(path = "message.html")]
pub struct MessageTemplate<'a> {
    pub banner: &'a MessageBanner,
    pub oob: bool,
}

pub fn render_page(board: &Board, banner: &MessageBanner) -> askama::Result<String> {
    PageTemplate {
        board,
        banner,
        oob: false,
    }
    .render()
}

pub fn render_mutation(banner: &MessageBanner, card: Option<&CardView>) -> askama::Result<String> {
    MutationTemplate {
        banner,
        card,
        oob: true,
    }
    .render()
}

pub fn render_message(banner: &MessageBanner) -> askama::Result<String> {
    MessageTemplate { banner, oob: false }.render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Activity, ActivityCollection};
    use crate::view::message::MessageKind;

    fn board_with(entries: &[(&str, &[&str])]) -> Board {
        let mut collection = ActivityCollection::new();
        for (name, participants) in entries {
            collection.insert(
                name.to_string(),
                Activity {
                    description: format!("About {}", name),
                    schedule: None,
                    max_participants: 10,
                    participants: participants.iter().map(|p| p.to_string()).collect(),
                },
            );
        }
        let mut board = Board::default();
        board.render_all(&collection);
        board
    }

    #[test]
    fn page_has_one_card_per_activity_and_placeholder_option() {
        let board = board_with(&[("Chess Club", &[]), ("Gym Class", &[]), ("Art", &[])]);
        let html = render_page(&board, &MessageBanner::default()).unwrap();

        assert_eq!(html.matches("class=\"activity-card\"").count(), 3);
        assert_eq!(html.matches("<option ").count(), 4);
        assert!(html.contains("-- Select an activity --"));
        assert!(html.contains("id=\"activities-list\""));
        assert!(html.contains("id=\"signup-form\""));
        assert!(html.contains("id=\"message\""));
        assert!(!html.contains("hx-swap-oob"));
    }

    #[test]
    fn empty_roster_renders_placeholder_only() {
        let board = board_with(&[("Gym Class", &[])]);
        let html = render_page(&board, &MessageBanner::default()).unwrap();

        assert!(html.contains("No participants yet."));
        assert!(!html.contains("<li>"));
        assert!(html.contains("<strong>Schedule:</strong> TBA"));
    }

    #[test]
    fn roster_renders_mailto_and_tagged_delete_in_order() {
        let board = board_with(&[("Chess Club", &["a@x.com", "b@x.com"])]);
        let html = render_page(&board, &MessageBanner::default()).unwrap();

        assert_eq!(html.matches("<li>").count(), 2);
        let first = html.find("href=\"mailto:a@x.com\"").unwrap();
        let second = html.find("href=\"mailto:b@x.com\"").unwrap();
        assert!(first < second);
        assert!(html.contains("data-email=\"a@x.com\""));
        assert!(html.contains("data-email=\"b@x.com\""));
        assert!(html.contains("data-activity-name=\"Chess Club\""));
        assert!(html.contains("2 / 10"));
        assert!(!html.contains("No participants yet."));
    }

    #[test]
    fn load_error_replaces_the_list() {
        let mut board = Board::default();
        board.show_load_error();
        let html = render_page(&board, &MessageBanner::default()).unwrap();

        assert!(html.contains("<p class=\"error\">Unable to load activities.</p>"));
        assert!(!html.contains("activity-card"));
    }

    #[test]
    fn text_is_escaped() {
        let board = board_with(&[("<b>Club", &[])]);
        let html = render_page(&board, &MessageBanner::default()).unwrap();

        assert!(!html.contains("<b>Club"));
        assert!(html.contains("&lt;b&gt;Club"));
    }

    #[test]
    fn mutation_fragment_swaps_banner_and_card_out_of_band() {
        let board = board_with(&[("Chess Club", &["a@x.com"])]);
        let mut banner = MessageBanner::default();
        banner.show("Signed up a@x.com", MessageKind::Success);

        let html = render_mutation(&banner, board.card("Chess Club")).unwrap();
        assert_eq!(html.matches("hx-swap-oob=\"true\"").count(), 2);
        assert!(html.contains("class=\"message success\""));
        assert!(html.contains(&board.cards[0].dom_id()));

        let html = render_mutation(&banner, None).unwrap();
        assert_eq!(html.matches("hx-swap-oob=\"true\"").count(), 1);
        assert!(!html.contains("activity-card"));
    }

    #[test]
    fn hidden_banner_fragment() {
        let mut banner = MessageBanner::default();
        banner.show("gone soon", MessageKind::Info);
        banner.hide();
        let html = render_message(&banner).unwrap();
        assert!(html.contains("class=\"message info hidden\""));
    }
}
