use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use reading_inference::blanks::{fill, scan};
use reading_inference::exercise::Topic;
use reading_inference::form::FormState;
use reading_inference::llm::CompletionModel;
use reading_inference::{AnswerEvaluator, AppError, Config, ExerciseGenerator, OpenAiClient};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "readerctl", about = "CLI for the reading inference exercise service", version)]
struct Cli {
    /// Override OPENAI_MODEL
    #[arg(global = true, long)]
    model: Option<String>,

    /// Override OPENAI_BASE_URL
    #[arg(global = true, long)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the blanks (runs of 3+ underscores) in a question paragraph
    Scan {
        /// Question text; read from --file when omitted
        text: Option<String>,
        /// Read the question text from a file
        #[arg(long, value_name = "PATH", conflicts_with = "text")]
        file: Option<PathBuf>,
    },
    /// Substitute answers into the blanks of a question paragraph
    Fill {
        /// Question text with blanks
        #[arg(long)]
        question: String,
        /// Answer for the next blank (repeatable, in order)
        #[arg(long = "answer", value_name = "TEXT")]
        answers: Vec<String>,
    },
    /// Generate a new exercise with the language model
    Generate {
        /// Topic to write about; random when omitted
        #[arg(long)]
        topic: Option<Topic>,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Ask the language model to evaluate answers
    Check {
        /// Context paragraph
        #[arg(long)]
        context: String,
        /// Question paragraph with blanks
        #[arg(long)]
        question: String,
        /// Answer for the next blank (repeatable, in order)
        #[arg(long = "answer", value_name = "TEXT")]
        answers: Vec<String>,
    },
    /// Interactive session: load an example, fill the blanks, get feedback
    Practice,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load env and parse CLI
    Config::dotenv_load();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
    let cli = Cli::parse();

    let mut conf = Config::new();
    if let Some(model) = cli.model {
        conf.openai_model = model;
    }
    if let Some(url) = cli.base_url {
        conf.openai_base_url = url;
    }

    match cli.command {
        Commands::Scan { text, file } => {
            let text = match (text, file) {
                (Some(t), None) => t,
                (None, Some(path)) => tokio::fs::read_to_string(&path).await?,
                _ => {
                    eprintln!("Must provide either <TEXT> or --file <path>");
                    std::process::exit(2);
                }
            };
            let markers = scan(&text);
            println!("{} blank(s)", markers.len());
            for m in markers {
                println!("#{}\tbytes {}..{}\t{}", m.ordinal + 1, m.start, m.end(), m.text);
            }
            Ok(())
        }
        Commands::Fill { question, answers } => {
            println!("{}", fill(&question, &answers));
            Ok(())
        }
        Commands::Generate { topic, pretty } => {
            let generator = ExerciseGenerator::new(model_from(&conf)?);
            let res = match topic {
                Some(t) => generator.generate_for(t).await,
                None => generator.generate().await,
            };
            match res {
                Ok(exercise) => {
                    if pretty {
                        println!("{}", serde_json::to_string_pretty(&exercise)?);
                    } else {
                        println!("{}", serde_json::to_string(&exercise)?);
                    }
                    Ok(())
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Commands::Check { context, question, answers } => {
            let evaluator = AnswerEvaluator::new(model_from(&conf)?);
            let feedback = evaluator.evaluate(&context, &question, &answers).await.map_err(|e| {
                eprintln!("Error: {}", e);
                e
            })?;
            println!("{}", feedback);
            Ok(())
        }
        Commands::Practice => practice(&conf).await,
    }
}

fn model_from(conf: &Config) -> Result<Arc<dyn CompletionModel>, AppError> {
    let client = OpenAiClient::from_config(conf)?;
    Ok(Arc::new(client))
}

async fn practice(conf: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut form = FormState::new();
    println!("Loading an example...");
    match model_from(conf) {
        Ok(model) => form.run_generate(&ExerciseGenerator::new(model)).await?,
        Err(e) => {
            form.begin_generate()?;
            form.finish_generate(Err(e));
        }
    }
    if let Some(notice) = form.take_notice() {
        println!("{}", notice);
    }

    println!("\nContext Paragraph\n{}\n", form.context());
    println!("Question Paragraph with Blanks\n{}\n", form.question_text());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    for index in 0..form.blank_count() {
        loop {
            print!("Blank {}: ", index + 1);
            io::stdout().flush()?;
            let Some(line) = lines.next() else {
                eprintln!("Input closed before every blank was answered");
                std::process::exit(2);
            };
            let answer = line?.trim().to_string();
            if !answer.is_empty() {
                form.set_answer(index, answer)?;
                break;
            }
        }
    }

    println!("\nChecking...");
    let feedback = match model_from(conf) {
        Ok(model) => form.run_submit(&AnswerEvaluator::new(model)).await?.to_string(),
        Err(e) => {
            form.begin_submit()?;
            form.finish_submit(Err(e));
            form.feedback().unwrap_or_default().to_string()
        }
    };
    println!("\nFeedback\n{}", feedback);
    Ok(())
}
