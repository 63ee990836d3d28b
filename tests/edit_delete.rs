use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn book(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
    cmd.env("CONTACT_BOOK_STORAGE", "file")
        .env("CONTACT_BOOK_DIR", dir.path());
    cmd
}

#[test]
fn edit_contact() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;

    // Only the given fields change, the id stays
    book(&dir)
        .args(["edit", "--id", "1", "--email", "johnny@example.com", "--tag", "work"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact updated successfully!"))
        .stdout(predicate::str::contains("#1 John Doe [work]"))
        .stdout(predicate::str::contains("Email: johnny@example.com"));

    // Keeping its own phone is not a collision
    book(&dir)
        .args(["edit", "--id", "1", "--phone", "+1234567890"])
        .assert()
        .success();

    // Taking another contact's phone is
    book(&dir)
        .args(["edit", "--id", "1", "--phone", "+1122334455"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Phone number already exists!"));

    book(&dir)
        .args(["edit", "--id", "404", "--name", "Nobody"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Contact not found!"));

    book(&dir)
        .args(["list", "--tag", "work"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Email: johnny@example.com"))
        .stdout(predicate::str::contains("Total: 3 | Friends: 0 | Work: 2 | Family: 1"));

    Ok(())
}

#[test]
fn deleting_contacts() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;

    // Declining the prompt keeps the contact
    book(&dir)
        .args(["delete", "--id", "2"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Delete cancelled"));

    book(&dir)
        .args(["delete", "--id", "2"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact deleted successfully!"));

    // Second delete of the same id is not found
    book(&dir)
        .args(["delete", "--id", "2", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Contact not found!"));

    book(&dir)
        .args(["delete", "--id", "3", "--yes"])
        .assert()
        .success();

    book(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("John Doe"))
        .stdout(predicate::str::contains("Jane Smith").not())
        .stdout(predicate::str::contains("Total: 1 | Friends: 1 | Work: 0 | Family: 0"));

    Ok(())
}
