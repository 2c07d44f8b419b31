use clap::Subcommand;
use portfolio_core_contact_contracts::{
    ContactFeatureService, ContactMessageListQuery, ContactMessageListResult,
};
use portfolio_di::Provide;
use portfolio_models::{
    contact::{ContactMessageFilter, ContactMessageId},
    pagination::{PaginationLimit, PaginationSlice},
    SearchTerm,
};
use uuid::Uuid;

use crate::environment::{types::ContactFeature, Provider};

#[derive(Debug, Subcommand)]
pub enum AdminContactCommand {
    /// List contact messages, newest first
    #[command(aliases(["l", "ls"]))]
    List {
        /// Only list messages which have been marked as read
        #[arg(long, conflicts_with = "unread")]
        read: bool,
        /// Only list messages which have not been marked as read
        #[arg(long)]
        unread: bool,
        /// Only list messages whose name, email or phone number contains this term
        #[arg(short, long)]
        search: Option<String>,
        /// Maximum number of messages to list
        #[arg(short = 'n', long, default_value_t = PaginationLimit::MAX)]
        limit: u64,
        /// Number of messages to skip
        #[arg(long, default_value_t = 0)]
        offset: u64,
    },
    /// Show a single message
    #[command(aliases(["s"]))]
    Show { id: Uuid },
    /// Mark a message as read
    Read { id: Uuid },
    /// Mark a message as unread
    Unread { id: Uuid },
    /// Delete a message
    #[command(aliases(["rm"]))]
    Delete { id: Uuid },
}

impl AdminContactCommand {
    pub async fn invoke(self, provider: &mut Provider) -> anyhow::Result<()> {
        let contact: ContactFeature = provider.provide();
        match self {
            Self::List {
                read,
                unread,
                search,
                limit,
                offset,
            } => {
                let query = ContactMessageListQuery {
                    pagination: PaginationSlice {
                        limit: PaginationLimit::try_new(limit)?,
                        offset,
                    },
                    filter: ContactMessageFilter {
                        is_read: (read || unread).then_some(read),
                        search: search.map(SearchTerm::try_new).transpose()?,
                    },
                };
                list(contact, query).await
            }
            Self::Show { id } => show(contact, id.into()).await,
            Self::Read { id } => update_read(contact, id.into(), true).await,
            Self::Unread { id } => update_read(contact, id.into(), false).await,
            Self::Delete { id } => delete(contact, id.into()).await,
        }
    }
}

async fn list(contact: ContactFeature, query: ContactMessageListQuery) -> anyhow::Result<()> {
    let ContactMessageListResult { total, messages } = contact.list_messages(query).await?;
    for message in &messages {
        let marker = if message.is_read { " " } else { "*" };
        println!("{marker} {} {message}", message.id);
    }
    println!("{} of {total} messages", messages.len());

    Ok(())
}

async fn show(contact: ContactFeature, id: ContactMessageId) -> anyhow::Result<()> {
    let message = contact.get_message(id).await?;
    let author = &message.author;

    println!("ID:        {}", message.id);
    println!("Name:      {}", author.name.as_str());
    println!("Email:     {}", author.email);
    println!(
        "Phone:     {}",
        author.phone.as_ref().map_or("Not provided", |x| x.as_str())
    );
    println!(
        "Submitted: {}",
        message.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!("Read:      {}", if message.is_read { "yes" } else { "no" });
    println!();
    println!("{}", message.content.as_str());

    Ok(())
}

async fn update_read(
    contact: ContactFeature,
    id: ContactMessageId,
    is_read: bool,
) -> anyhow::Result<()> {
    contact.update_message_read(id, is_read).await?;
    println!(
        "Message {id} has been marked as {}",
        if is_read { "read" } else { "unread" }
    );

    Ok(())
}

async fn delete(contact: ContactFeature, id: ContactMessageId) -> anyhow::Result<()> {
    contact.delete_message(id).await?;
    println!("Message {id} has been deleted");

    Ok(())
}
