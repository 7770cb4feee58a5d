// src/cli.rs
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr};

use crate::{
    bitable::{FeishuClient, get_token},
    config::Settings,
    error::LookupError,
    file,
    members::MemberProfile,
    progress::Progress,
    session::{Session, Source, load_members},
};

#[derive(Parser)]
#[command(version, about = "Look up a member's activity record", long_about = None)]
pub struct Cli {
    /// Config file (default: ./member_lookup.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Find one member by exact name and student ID
    Lookup {
        #[arg(long)]
        name: String,
        #[arg(long)]
        id: String,
        /// Also write the activity record as CSV
        #[arg(long)]
        export: bool,
        /// Output directory for --export
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Authenticate only
    Check,
    /// Load the whole table and report counts
    Stats,
    /// Read `name,id` lines from stdin against one session (`:reset`, `:quit`)
    Shell,
}

/// Prints progress to stderr.
struct CliProgress;

impl Progress for CliProgress {
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn page_done(&mut self, page: usize, total: usize) {
        eprintln!("  已获取第 {page} 页（共 {total} 条）");
    }
    fn warn(&mut self, msg: &str) {
        eprintln!("警告: {msg}");
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut settings = Settings::load(cli.config.as_deref()).wrap_err("loading settings")?;
    let source = Source::from_settings(&settings)?;
    let api = FeishuClient::new()?;

    match cli.command {
        Command::Check => {
            let token = get_token(&api, &source.credential)?;
            match token.expires_in {
                Some(secs) => println!("凭证有效，令牌有效期 {secs} 秒"),
                None => println!("凭证有效"),
            }
        }
        Command::Stats => {
            let report = load_members(&api, &source, &mut CliProgress)?;
            println!("记录数: {}", report.members.len());
            println!("页数:   {}", report.pages);
            if let Some(w) = report.truncated {
                println!("截断:   {w}");
            }
        }
        Command::Lookup { name, id, export, out } => {
            if let Some(dir) = out {
                settings.export.set_dir(&dir.to_string_lossy());
            }
            let mut session = Session::new(api, source);
            match session.lookup(&name, &id, &mut CliProgress)? {
                None => println!("未找到匹配的成员记录，请检查姓名和学号是否正确"),
                Some(member) => {
                    print_member(member);
                    if export {
                        let path = file::write_export_today(member, &settings.export)?;
                        println!("已导出到 {}", path.display());
                    }
                }
            }
        }
        Command::Shell => shell(Session::new(api, source), &settings)?,
    }
    Ok(())
}

fn shell(mut session: Session<FeishuClient>, settings: &Settings) -> Result<()> {
    let stdin = io::stdin();
    let mut out = io::stdout();
    eprintln!("输入 `姓名,学号` 查询（查到后 `:export` 导出，`:reset` 重置，`:quit` 退出）");

    let mut last: Option<MemberProfile> = None;
    loop {
        write!(out, "> ")?;
        out.flush()?;

        let mut line = s!();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim_end_matches(['\r', '\n']);

        match line {
            ":quit" | ":q" => break,
            ":reset" => {
                session.reset();
                last = None;
                println!("已重置，下次查询将重新加载所有数据");
            }
            ":export" => match &last {
                Some(m) => match file::write_export_today(m, &settings.export) {
                    Ok(path) => println!("已导出到 {}", path.display()),
                    Err(e) => println!("导出失败: {e}"),
                },
                None => println!("没有可导出的记录"),
            },
            _ => {
                let (name, id) = line.split_once(',').unwrap_or((line, ""));
                match session.lookup(name, id, &mut CliProgress) {
                    Ok(Some(member)) => {
                        print_member(member);
                        last = Some(member.clone());
                    }
                    Ok(None) => {
                        println!("未找到匹配的成员记录");
                        last = None;
                    }
                    Err(LookupError::MissingInput) => println!("请同时输入姓名和学号进行查询"),
                    // Load failures end this attempt, not the shell.
                    Err(e) => println!("查询过程中发生错误: {e}"),
                }
            }
        }
    }
    Ok(())
}

fn print_member(m: &MemberProfile) {
    println!("{} ({})", m.name, m.student_id);
    println!("  年级:       {}", m.grade);
    println!("  性别:       {}", m.gender);
    println!("  院系:       {}", m.department);
    println!("  入社日期:   {}", m.join_date);
    println!("  参加活动数: {}", m.activity_count());
    if m.activities.is_empty() {
        println!("  暂无活动记录");
    }
    for (i, a) in m.activities.iter().enumerate() {
        println!("  {:>3}. {}", i + 1, a);
    }
}
