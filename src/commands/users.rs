use tabled::Tabled;

use crate::cli::{UserListArgs, UserViewArgs};
use crate::error::Result;
use crate::output;
use crate::pipeline::UserCatalog;
use crate::search;
use crate::types::DisplayRecord;

#[derive(Tabled)]
struct UserRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
}

impl From<&DisplayRecord> for UserRow {
    fn from(record: &DisplayRecord) -> Self {
        Self {
            id: record.id,
            name: record.formatted_name.clone(),
        }
    }
}

async fn load(catalog: &UserCatalog) -> Result<Vec<DisplayRecord>> {
    output::loading("Loading users...");
    Ok(catalog.run().await?)
}

pub async fn list(catalog: &UserCatalog, args: UserListArgs) -> Result<()> {
    let records = load(catalog).await?;

    let shown: Vec<DisplayRecord> = match args.search.as_deref() {
        Some(query) => search::filter(&records, query).into_iter().cloned().collect(),
        None => records,
    };

    if shown.is_empty() {
        output::print_message("No users found");
        return Ok(());
    }

    output::print_table(&shown, |r| UserRow::from(r), |r| {
        format!("{}\t{}", r.id, r.formatted_name)
    });

    Ok(())
}

pub async fn view(catalog: &UserCatalog, args: UserViewArgs) -> Result<()> {
    let records = load(catalog).await?;
    let record = search::select(&records, &args.selector)?;

    output::print_item(record, |r| {
        println!("{}", output::heading(&r.formatted_name));
        println!("{}", r.address.street);
        println!("{}", r.address.suite);
        println!("{}", r.address.zipcode);
    });

    Ok(())
}
