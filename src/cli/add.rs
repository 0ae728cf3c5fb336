//! `medmoriser add` command
//!
//! # Usage
//! ```bash
//! medmoriser add "Normal resting heart rate" "60 to 100 bpm"
//! medmoriser add "Where does the Krebs cycle occur" "Mitochondrial matrix" -t biochem,urgent
//! medmoriser add "Who to ask about dosing" "Pharmacy" -p 12345678 -e pharm@example.com
//! medmoriser add "ECG lead count" "12" --set Cardiology
//! ```

use anyhow::Result;
use clap::Args;

use super::output;
use super::utils::{execute, AppContext};
use crate::core::command::AddCommand;
use crate::core::field::{parse_tags, Answer, Email, Phone, Question, SetName};
use crate::core::qanda::QAndA;

#[derive(Args, Debug)]
pub struct AddArgs {
    /// The question
    pub question: String,

    /// The answer
    pub answer: String,

    /// Contact phone number
    #[arg(short, long)]
    pub phone: Option<String>,

    /// Contact email
    #[arg(short, long)]
    pub email: Option<String>,

    /// Tags (comma-separated or repeated)
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Also put the new entry into this question set
    #[arg(short, long)]
    pub set: Option<String>,
}

pub fn run(args: AddArgs, ctx: &AppContext) -> Result<()> {
    let qanda = QAndA::new(
        Question::new(&args.question)?,
        args.phone.as_deref().map(Phone::new).transpose()?.unwrap_or_default(),
        args.email.as_deref().map(Email::new).transpose()?.unwrap_or_default(),
        Answer::new(&args.answer)?,
        parse_tags(&args.tags)?,
    );

    let mut command = AddCommand::new(qanda);
    if let Some(set) = &args.set {
        command = command.into_set(SetName::new(set)?);
    }

    let (result, _) = execute(ctx, command)?;
    output::print_result(&result, ctx.format)
}
