use shellfolio_content::OutputLine;
use shellfolio_core::{update, AppState, BlockView, CommandBlock, Msg, Span, ViewLine};

fn block(output: Vec<OutputLine>) -> CommandBlock {
    CommandBlock {
        prompt: "$".to_string(),
        command: Some("just test".to_string()),
        output: Some(output),
    }
}

#[test]
fn project_entry_expands_to_name_description_and_link() {
    let view = BlockView::from_block(&block(vec![OutputLine::ProjectEntry {
        name: "Kimchi Token".to_string(),
        description: "Token launch.".to_string(),
        href: Some("https://www.kimchitoken.com/".to_string()),
    }]));

    assert_eq!(
        view.lines,
        vec![
            ViewLine {
                spans: vec![Span::Emphasis("Kimchi Token".to_string())]
            },
            ViewLine {
                spans: vec![Span::Plain("Token launch.".to_string())]
            },
            ViewLine {
                spans: vec![Span::Link {
                    label: "kimchitoken.com".to_string(),
                    href: "https://www.kimchitoken.com/".to_string(),
                }]
            },
        ]
    );
}

#[test]
fn project_entry_without_href_has_two_lines() {
    let view = BlockView::from_block(&block(vec![OutputLine::ProjectEntry {
        name: "AI Journal".to_string(),
        description: "Notes.".to_string(),
        href: None,
    }]));

    assert_eq!(view.lines.len(), 2);
}

#[test]
fn malformed_project_href_is_shown_raw() {
    let view = BlockView::from_block(&block(vec![OutputLine::ProjectEntry {
        name: "Broken".to_string(),
        description: "Bad link.".to_string(),
        href: Some("not a url".to_string()),
    }]));

    assert_eq!(view.lines[2].plain_text(), "not a url");
}

#[test]
fn block_without_output_has_no_lines() {
    let view = BlockView::from_block(&CommandBlock {
        prompt: "$".to_string(),
        command: Some("cd work".to_string()),
        output: None,
    });

    assert!(view.lines.is_empty());
}

#[test]
fn view_mirrors_state() {
    let (mut state, _) = update(AppState::new(), Msg::InputChanged("just he".to_string()));
    let view = state.view();

    assert_eq!(view.blocks.len(), 5);
    assert_eq!(view.input, "just he");
    assert!(!view.interactive);
    assert!(state.consume_dirty());
    assert!(view.blocks[2].lines[0].plain_text().contains("Lana Zumbrunn"));
}
