//! GraphKit 最小生成树工具
//!
//! 从文本边列表读取图并计算最小生成树

use anyhow::Context;
use clap::Parser;
use graphkit::import::{EdgeListLoader, LoaderConfig};
use graphkit::{EdgeKind, MstOptions, SortAlgorithm, VertexId};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "graphkit-mst")]
#[command(about = "GraphKit 最小生成树工具")]
struct Args {
    /// 边列表文件路径
    #[arg(short, long, default_value = "edges.txt")]
    input: PathBuf,

    /// 种子顶点 ID
    #[arg(short, long, default_value = "1")]
    seed: u64,

    /// 候选边排序算法: merge, quick, heap, shell, insertion, selection, bubble
    #[arg(long, default_value = "merge")]
    sort: SortAlgorithm,

    /// 字段分隔符
    #[arg(short, long, default_value = " ")]
    delimiter: char,

    /// 按有向边导入
    #[arg(long)]
    directed: bool,

    /// 输出调试日志
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    if !args.delimiter.is_ascii() {
        anyhow::bail!("分隔符必须是 ASCII 字符: {:?}", args.delimiter);
    }

    let config = LoaderConfig {
        delimiter: args.delimiter as u8,
        kind: if args.directed {
            EdgeKind::Directed
        } else {
            EdgeKind::Undirected
        },
        header: true,
    };

    println!("GraphKit 最小生成树");
    println!("===================");

    let edge_list = EdgeListLoader::new(config)
        .load_path(&args.input)
        .with_context(|| format!("无法导入 {:?}", args.input))?;

    println!("顶点数: {}", edge_list.vertex_count);
    if let Some(declared) = edge_list.declared_edges {
        println!("声明边数: {}", declared);
    }

    let graph = edge_list.into_graph()?;
    println!("解析边数: {}", graph.num_edges());

    let options = MstOptions {
        seed: VertexId::new(args.seed),
        sort: args.sort,
    };
    let tree = graph
        .min_spanning_tree_with(&options)
        .context("最小生成树计算失败")?;

    println!("\n树边:");
    for edge in &tree.edges {
        println!("  {}", edge);
    }
    println!("\n总权重: {}", tree.total_weight);
    println!("整数累加权重: {}", tree.truncated_cost());

    Ok(())
}
