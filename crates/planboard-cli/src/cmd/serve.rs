use anyhow::Result;
use planboard_core::paths;
use std::path::Path;

pub fn run(root: &Path, port: u16, no_open: bool) -> Result<()> {
    let rt = tokio::runtime::Runtime::new()?;
    let root_buf = root.to_path_buf();

    rt.block_on(async move {
        let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;
        let actual_port = listener.local_addr()?.port();

        println!(
            "planboard → http://localhost:{actual_port}  (data: {})",
            paths::data_path(&root_buf).display()
        );

        tokio::select! {
            res = planboard_server::serve_on(root_buf, listener, !no_open) => res,
            _ = tokio::signal::ctrl_c() => Ok(()),
        }
    })
}
