use std::collections::HashMap;

use crate::marks::{group::SceneGroup, mark::SceneMark};
use serde::{Deserialize, Serialize};

/// Root of a rendered chart. Marks paint in order, later marks on top.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneGraph {
    pub marks: Vec<SceneMark>,
    pub width: f32,
    pub height: f32,
    pub origin: [f32; 2],
}

impl SceneGraph {
    /// A sized scene with no content
    pub fn placeholder(width: f32, height: f32) -> Self {
        Self {
            marks: vec![],
            width,
            height,
            origin: [0.0, 0.0],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    pub fn groups(&self) -> Vec<&SceneGroup> {
        self.marks
            .iter()
            .filter_map(|m| {
                let SceneMark::Group(g) = m else {
                    return None;
                };
                Some(g)
            })
            .collect()
    }

    /// Names of the top-level groups in paint order
    pub fn layer_names(&self) -> Vec<&str> {
        self.groups().iter().map(|g| g.name.as_str()).collect()
    }

    pub fn group(&self, name: &str) -> Option<&SceneGroup> {
        self.groups().into_iter().find(|g| g.name == name)
    }

    pub fn children(&self) -> &[SceneMark] {
        &self.marks
    }

    pub fn get_mark(&self, mark_path: &[usize]) -> Option<&SceneMark> {
        // empty path is the root, which is not a mark
        let (first, rest) = mark_path.split_first()?;
        let mut child = self.marks.get(*first)?;
        for index in rest {
            child = child.children().get(*index)?;
        }
        Some(child)
    }

    /// Returns all of the group paths in the scene graph
    pub fn group_paths(&self) -> Vec<Vec<usize>> {
        let mut paths = vec![];
        for (index, mark) in self.marks.iter().enumerate() {
            let SceneMark::Group(group) = mark else {
                continue;
            };
            paths.push(vec![index]);
            for sub_path in group.group_paths() {
                let mut path = vec![index];
                path.extend(sub_path);
                paths.push(path);
            }
        }
        paths
    }

    /// Returns mapping from the names of each named group to their path
    pub fn group_names(&self) -> HashMap<String, Vec<usize>> {
        let mut names = HashMap::new();
        for path in self.group_paths() {
            let Some(SceneMark::Group(group)) = self.get_mark(&path) else {
                continue;
            };
            names.insert(group.name.clone(), path);
        }
        names
    }

    /// Every non-group mark, depth first, in paint order
    pub fn leaf_marks(&self) -> Vec<&SceneMark> {
        fn collect<'a>(marks: &'a [SceneMark], out: &mut Vec<&'a SceneMark>) {
            for mark in marks {
                match mark {
                    SceneMark::Group(group) => collect(&group.marks, out),
                    other => out.push(other),
                }
            }
        }
        let mut out = vec![];
        collect(&self.marks, &mut out);
        out
    }
}
