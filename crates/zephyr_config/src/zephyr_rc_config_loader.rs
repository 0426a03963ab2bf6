use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;

use pathdiff::diff_paths;
use serde_json5::Location;

use zephyr_core::diagnostic_error;
use zephyr_core::types::CodeFrame;
use zephyr_core::types::CodeHighlight;
use zephyr_core::types::DiagnosticBuilder;
use zephyr_core::types::DiagnosticError;
use zephyr_core::types::ErrorKind;
use zephyr_core::types::File;
use zephyr_filesystem::search::find_ancestor_file;
use zephyr_filesystem::FileSystemRef;

use super::build_config::BuildConfig;
use super::build_config::PluginNode;
use super::builtin_presets::get_builtin_preset;
use super::partial_build_config::PartialBuildConfig;
use super::zephyr_rc::ZephyrRcFile;

/// Recognized config file names, in priority order
pub const CONFIG_FILE_NAMES: &[&str] = &[".zephyrrc", "zephyr.config.json"];

#[derive(Default)]
pub struct LoadConfigOptions<'a> {
  /// A list of additional plugins that will be appended to the plugins config
  pub additional_plugins: Vec<PluginNode>,
  /// A file path that will be used to load the config from
  pub config: Option<&'a str>,
  /// A file path that will be used to load the config from when no other
  /// .zephyrrc can be found
  pub fallback_config: Option<&'a str>,
}

/// Loads and validates .zephyrrc config
pub struct ZephyrRcConfigLoader {
  fs: FileSystemRef,
}

impl ZephyrRcConfigLoader {
  pub fn new(fs: FileSystemRef) -> Self {
    ZephyrRcConfigLoader { fs }
  }

  fn find_config(&self, project_root: &Path, path: &Path) -> Result<PathBuf, DiagnosticError> {
    let from = path.parent().unwrap_or(path);

    find_ancestor_file(&*self.fs, CONFIG_FILE_NAMES, from, project_root)
      .ok_or_else(|| diagnostic_error!("Unable to locate .zephyrrc from {}", from.display()))
  }

  fn resolve_from(&self, project_root: &Path) -> PathBuf {
    let cwd = self.fs.cwd().unwrap();
    let relative = diff_paths(cwd.clone(), project_root);
    let is_cwd_inside_project_root =
      relative.is_some_and(|p| !p.starts_with("..") && !p.is_absolute());

    let dir = if is_cwd_inside_project_root {
      &cwd
    } else {
      project_root
    };

    dir.join("index")
  }

  fn resolve_specifier(
    &self,
    specifier: &str,
    resolve_from: &Path,
  ) -> Result<PathBuf, DiagnosticError> {
    let base = resolve_from.parent().unwrap_or(resolve_from);
    let path = if Path::new(specifier).is_absolute() {
      PathBuf::from(specifier)
    } else {
      base.join(specifier)
    };

    let path = self
      .fs
      .canonicalize_base(&path)
      .map_err(|source| diagnostic_error!("{}", source))?;

    if !self.fs.is_file(&path) {
      return Err(diagnostic_error!(DiagnosticBuilder::default()
        .message("File not found")
        .kind(ErrorKind::NotFound)
        .code_frames(vec![CodeFrame::from(path)])));
    }

    Ok(path)
  }

  fn load_config(
    &self,
    path: PathBuf,
    visiting: &mut Vec<PathBuf>,
  ) -> Result<(PartialBuildConfig, Vec<PathBuf>), DiagnosticError> {
    if visiting.contains(&path) {
      return Err(diagnostic_error!(DiagnosticBuilder::default()
        .message(format!("Preset cycle detected at {}", path.display()))
        .kind(ErrorKind::InvalidConfig)
        .code_frames(vec![CodeFrame::from(path.clone())])));
    }

    let raw = self.fs.read_to_string(&path).map_err(|source| {
      diagnostic_error!(DiagnosticBuilder::default()
        .message(source.to_string())
        .kind(ErrorKind::NotFound)
        .code_frames(vec![CodeFrame::from(path.clone())]))
    })?;

    let contents = serde_json5::from_str(&raw).map_err(|error| {
      serde_to_diagnostic_error(
        error,
        File {
          contents: raw.clone(),
          path: path.clone(),
        },
      )
    })?;

    tracing::debug!(path = %path.display(), "Loaded build config file");

    visiting.push(path.clone());
    let processed = self.process_config(
      ZephyrRcFile {
        contents,
        path,
        raw,
      },
      visiting,
    );
    visiting.pop();

    processed
  }

  fn resolve_preset_path(
    &self,
    zephyr_rc_file: &ZephyrRcFile,
    preset: &str,
  ) -> Result<PathBuf, DiagnosticError> {
    let path = zephyr_rc_file
      .path
      .parent()
      .unwrap_or(&zephyr_rc_file.path)
      .join(preset);

    self.fs.canonicalize_base(&path).map_err(|source| {
      diagnostic_error!("{}", source).context(diagnostic_error!(DiagnosticBuilder::default()
        .message(format!(
          "Failed to resolve preset {preset} from {}",
          zephyr_rc_file.path.display()
        ))
        .code_frames(vec![CodeFrame::from(File::from(zephyr_rc_file))])))
    })
  }

  /// Processes a .zephyrrc file by loading and merging "presets"
  /// configurations into a single PartialBuildConfig struct
  ///
  /// Configuration merging is applied to all "presets" configurations
  /// before they are merged into the base config, so that an earlier preset
  /// takes precedence over a later one and the base config wins overall.
  /// The `visiting` stack holds the chain of config paths currently being
  /// processed, turning a preset cycle into an error rather than unbounded
  /// recursion.
  ///
  fn process_config(
    &self,
    zephyr_rc_file: ZephyrRcFile,
    visiting: &mut Vec<PathBuf>,
  ) -> Result<(PartialBuildConfig, Vec<PathBuf>), DiagnosticError> {
    let mut files = vec![zephyr_rc_file.path.clone()];
    let presets = match zephyr_rc_file.contents.presets.as_ref() {
      None => Vec::new(),
      Some(presets) => presets.as_slice().to_vec(),
    };

    if presets.is_empty() {
      return Ok((PartialBuildConfig::try_from(&zephyr_rc_file)?, files));
    }

    let mut merged_presets = PartialBuildConfig::default();
    for preset in presets {
      let (preset_config, mut preset_files) = if preset.starts_with('.') {
        let preset_path = self.resolve_preset_path(&zephyr_rc_file, &preset)?;
        self.load_config(preset_path, visiting)?
      } else {
        let builtin = get_builtin_preset(&preset).ok_or_else(|| {
          diagnostic_error!(DiagnosticBuilder::default()
            .message(format!(
              "Failed to resolve preset {preset} from {}",
              zephyr_rc_file.path.display()
            ))
            .kind(ErrorKind::NotFound)
            .code_frames(vec![CodeFrame::from(File::from(&zephyr_rc_file))]))
        })?;

        self.process_config(builtin, visiting)?
      };

      merged_presets = merged_presets.merge(preset_config);
      files.append(&mut preset_files);
    }

    let config = PartialBuildConfig::try_from(&zephyr_rc_file)?.merge(merged_presets);

    Ok((config, files))
  }

  /// Finds and loads a .zephyrrc file
  ///
  /// By default the nearest .zephyrrc or zephyr.config.json ancestor file
  /// from the current working directory will be loaded, unless the config
  /// or fallback_config option are specified. In cases where the current
  /// working directory does not live within the project root, the config
  /// will be located from the project root instead.
  ///
  pub fn load(
    &self,
    project_root: &Path,
    options: LoadConfigOptions<'_>,
  ) -> Result<(BuildConfig, Vec<PathBuf>), DiagnosticError> {
    let resolve_from = self.resolve_from(project_root);
    let mut config_path = match options.config {
      Some(config) => self
        .resolve_specifier(config, &resolve_from)
        .map_err(|source| {
          source.context(diagnostic_error!(
            "Failed to resolve config {config} from {}",
            resolve_from.display()
          ))
        }),
      None => self.find_config(project_root, &resolve_from),
    };

    if config_path.is_err() {
      if let Some(fallback_config) = options.fallback_config {
        config_path = self
          .resolve_specifier(fallback_config, &resolve_from)
          .map_err(|source| {
            source.context(diagnostic_error!(
              "Failed to resolve fallback {fallback_config} from {}",
              resolve_from.display()
            ))
          });
      }
    }

    let config_path = config_path?;
    let (mut partial_config, files) = self.load_config(config_path, &mut Vec::new())?;

    if !options.additional_plugins.is_empty() {
      partial_config.plugins.extend(options.additional_plugins);

      let mut seen = HashSet::new();
      partial_config.plugins.retain(|plugin_node| {
        if seen.contains(&plugin_node.package_name) {
          false
        } else {
          seen.insert(plugin_node.package_name.clone());
          true
        }
      });
    }

    let build_config = BuildConfig::from(partial_config);

    if build_config.content.is_empty() {
      tracing::warn!("No content globs configured, so no source files will be scanned");
    }

    Ok((build_config, files))
  }
}

fn serde_to_diagnostic_error(error: serde_json5::Error, file: File) -> DiagnosticError {
  let mut diagnostic_error = DiagnosticBuilder::default();
  diagnostic_error.message(format!("Failed to parse {}", file.path.display()));
  diagnostic_error.kind(ErrorKind::ParseError);

  match error {
    serde_json5::Error::Message { msg, location } => {
      let location = location.unwrap_or(Location { column: 1, line: 1 });

      diagnostic_error.code_frames(vec![CodeFrame {
        code_highlights: vec![CodeHighlight {
          message: Some(msg),
          ..CodeHighlight::from([location.line, location.column])
        }],
        ..CodeFrame::from(file)
      }]);
    }
  };

  diagnostic_error!(diagnostic_error)
}
