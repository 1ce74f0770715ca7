use std::cell::RefCell;
use std::fs::File;
use std::io::{Read, Seek, SeekFrom, Write};

use block_dev::{BlockDevice, Result, check_len};
use send_wrapper::SendWrapper;

/// 以宿主机上的镜像文件作为块设备。
///
/// 文件句柄只能在创建它的线程上使用。
#[derive(Debug)]
pub struct BlockFile {
    inner: SendWrapper<RefCell<File>>,
    block_size: usize,
}

impl BlockFile {
    pub fn new(fd: File, block_size: usize) -> Self {
        Self {
            inner: SendWrapper::new(RefCell::new(fd)),
            block_size,
        }
    }

    fn offset(&self, block_id: usize) -> u64 {
        block_id as u64 * self.block_size as u64
    }
}

impl BlockDevice for BlockFile {
    fn block_size(&self) -> usize {
        self.block_size
    }

    fn read_block(&self, block_id: usize, buf: &mut [u8]) -> Result<()> {
        check_len(self.block_size, buf.len())?;
        let mut file = self.inner.borrow_mut();
        file.seek(SeekFrom::Start(self.offset(block_id)))?;
        file.read_exact(buf)?;
        Ok(())
    }

    fn write_block(&self, block_id: usize, buf: &[u8]) -> Result<()> {
        check_len(self.block_size, buf.len())?;
        let mut file = self.inner.borrow_mut();
        file.seek(SeekFrom::Start(self.offset(block_id)))?;
        file.write_all(buf)?;
        Ok(())
    }
}
