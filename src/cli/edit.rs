//! `medmoriser edit` command
//!
//! Only the given fields change; everything else is kept.
//!
//! # Usage
//! ```bash
//! medmoriser edit 2 --answer "Mitochondrial matrix"
//! medmoriser edit 1 -t cardio,exam          # Replace all tags
//! medmoriser edit 1 --clear-tags            # Remove all tags
//! ```

use anyhow::Result;
use clap::Args;

use super::output;
use super::utils::{execute, parse_index, AppContext};
use crate::core::command::{EditCommand, Index};
use crate::core::field::{parse_tags, Answer, Email, Phone, Question};
use crate::core::qanda::QAndAChanges;

#[derive(Args, Debug)]
pub struct EditArgs {
    /// Index of the entry in the list (starting at 1)
    #[arg(value_parser = parse_index)]
    pub index: Index,

    /// New question
    #[arg(short, long)]
    pub question: Option<String>,

    /// New answer
    #[arg(short, long)]
    pub answer: Option<String>,

    /// New contact phone number
    #[arg(short, long)]
    pub phone: Option<String>,

    /// New contact email
    #[arg(short, long)]
    pub email: Option<String>,

    /// Replacement tags (comma-separated or repeated)
    #[arg(short, long, value_delimiter = ',', conflicts_with = "clear_tags")]
    pub tags: Option<Vec<String>>,

    /// Remove every tag
    #[arg(long)]
    pub clear_tags: bool,
}

impl EditArgs {
    fn changes(&self) -> Result<QAndAChanges> {
        let tags = if self.clear_tags {
            Some(Default::default())
        } else {
            self.tags.as_ref().map(parse_tags).transpose()?
        };

        Ok(QAndAChanges {
            question: self.question.as_deref().map(Question::new).transpose()?,
            phone: self.phone.as_deref().map(Phone::new).transpose()?,
            email: self.email.as_deref().map(Email::new).transpose()?,
            answer: self.answer.as_deref().map(Answer::new).transpose()?,
            tags,
        })
    }
}

pub fn run(args: EditArgs, ctx: &AppContext) -> Result<()> {
    let changes = args.changes()?;
    let (result, _) = execute(ctx, EditCommand::new(args.index, changes))?;
    output::print_result(&result, ctx.format)
}
