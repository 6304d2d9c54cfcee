//! Rendering of the systemd unit file installed by `setup-service`.

/// Borrowed values substituted into the unit template.
pub struct UnitSpec<'a> {
    pub description: &'a str,
    pub user: &'a str,
    pub working_dir: &'a str,
    pub env_path: &'a str,
    pub exec_start: &'a str,
    pub shell: &'a str,
}

/// Render the unit text. The ExecStart line activates the virtual
/// environment through the shell before launching the hub, so the unit
/// works without the venv's binaries being on PATH.
pub fn render_unit(spec: &UnitSpec<'_>) -> String {
    format!(
        "[Unit]\n\
         Description={description}\n\
         After=network.target\n\
         \n\
         [Service]\n\
         Type=simple\n\
         User={user}\n\
         WorkingDirectory={working_dir}\n\
         ExecStart={shell} -c 'source {env_path}/bin/activate && {exec_start}'\n\
         Restart=always\n\
         \n\
         [Install]\n\
         WantedBy=multi-user.target\n",
        description = spec.description,
        user = spec.user,
        working_dir = spec.working_dir,
        env_path = spec.env_path,
        exec_start = spec.exec_start,
        shell = spec.shell,
    )
}
