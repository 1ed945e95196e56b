//! End-to-end tests driving the address book through parsed input lines,
//! the same way the interactive loop does.

use addressbook::commands::CommandContext;
use addressbook::{parser, CommandError, CommandResult};

fn run(ctx: &mut CommandContext, line: &str) -> Result<CommandResult, CommandError> {
    parser::parse(line)?.execute(ctx)
}

#[test]
fn test_add_sort_list_delete_flow() {
    let mut ctx = CommandContext::default();

    run(&mut ctx, "add Bob p/111 e/bob@example.com a/Blk 1, Bob Street").unwrap();
    run(&mut ctx, "add alice p/222 pe/alice@example.com a/Blk 2").unwrap();
    run(&mut ctx, "add Charlie pp/333 e/charlie@example.com a/Blk 3 t/colleagues").unwrap();

    let sorted = run(&mut ctx, "sort").unwrap();
    assert_eq!(sorted.feedback, "Address book has been sorted!");

    let listed = run(&mut ctx, "list").unwrap();
    let names: Vec<&str> = listed.persons().iter().map(|p| p.name().as_str()).collect();
    assert_eq!(names, vec!["Bob", "Charlie", "alice"]);

    let deleted = run(&mut ctx, "delete 3").unwrap();
    assert!(deleted.feedback.starts_with("Deleted Person: alice"));
    assert_eq!(ctx.book().len(), 2);
}

#[test]
fn test_view_respects_privacy() {
    let mut ctx = CommandContext::default();
    run(&mut ctx, "add Dana pp/98765432 e/dana@example.com pa/Blk 9, Hidden Road t/vip").unwrap();

    let view = run(&mut ctx, "view 1").unwrap();
    assert_eq!(view.feedback, "Viewing person: Dana Email: dana@example.com Tags: [vip]");

    let view_all = run(&mut ctx, "viewall 1").unwrap();
    assert_eq!(
        view_all.feedback,
        "Viewing person: Dana Phone: (private) 98765432 Email: dana@example.com \
         Address: (private) Blk 9,Hidden Road Tags: [vip]"
    );
}

#[test]
fn test_errors_surface_without_mutation() {
    let mut ctx = CommandContext::default();
    run(&mut ctx, "add Eve p/1 e/eve@example.com a/Somewhere").unwrap();

    assert_eq!(
        run(&mut ctx, "add Eve p/1 e/eve@example.com a/Somewhere"),
        Err(CommandError::DuplicatePerson)
    );
    assert!(matches!(
        run(&mut ctx, "delete 5"),
        Err(CommandError::InvalidIndex { index: 5, len: 1 })
    ));
    assert!(matches!(
        run(&mut ctx, "add Eve p/abc e/eve@example.com a/Somewhere"),
        Err(CommandError::Validation(_))
    ));
    assert_eq!(ctx.book().len(), 1);
}

#[test]
fn test_address_of_only_commas_is_rejected() {
    let mut ctx = CommandContext::default();

    let err = run(&mut ctx, "add Bob p/1 e/b@x a/,,").unwrap_err();
    assert!(matches!(err, CommandError::Validation(_)));
    assert!(ctx.book().is_empty());
}

#[test]
fn test_clear_then_add_resolves_against_book() {
    let mut ctx = CommandContext::default();
    run(&mut ctx, "add Amy p/1 e/amy@x a/Blk 1").unwrap();
    run(&mut ctx, "list").unwrap();
    run(&mut ctx, "clear").unwrap();
    run(&mut ctx, "add Zoe p/2 e/zoe@x a/Blk 2").unwrap();

    let deleted = run(&mut ctx, "delete 1").unwrap();
    assert!(deleted.feedback.starts_with("Deleted Person: Zoe"));
    assert!(ctx.book().is_empty());
}

#[test]
fn test_exit_is_recognised() {
    let command = parser::parse("exit").unwrap();
    assert!(command.is_exit());

    let mut ctx = CommandContext::default();
    let result = command.execute(&mut ctx).unwrap();
    assert_eq!(result.feedback, "Exiting Address Book as requested ...");
}

#[test]
fn test_book_round_trips_through_json() {
    let mut ctx = CommandContext::default();
    run(&mut ctx, "add Finn pp/555 e/finn@example.com a/1, Road, #01-01, 123456 t/a t/b").unwrap();

    let json = serde_json::to_string(ctx.book().persons()).unwrap();
    let persons: Vec<addressbook::Person> = serde_json::from_str(&json).unwrap();

    let mut restored = addressbook::AddressBook::new();
    restored.replace_all(persons).unwrap();
    assert_eq!(&restored, ctx.book());
    assert!(restored.persons()[0].phone().is_private());
}
